// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! User interface rendering logic.
//!
//! This module translates the [`App`] state into widgets using the `ratatui`
//! framework. The visible page is not stored anywhere: [`draw`] asks the
//! pipeline to recompute it from the current catalog, filter text, sort state
//! and offset, so whatever state an interaction event just produced is what
//! gets rendered.

mod detail;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::{
    App, MainView,
    actions::events::Focus,
    pipeline::{self, TableView},
};

/// Renders the user interface to the terminal frame.
///
/// The catalog view stacks the search input, the table page and a status
/// line; an open detail modal overlays it. The full-screen detail page
/// replaces the catalog view entirely.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    if app.main_view == MainView::Detail {
        detail::draw_detail_page(f, area, app);
        return;
    }

    let view = app.current_view();
    let headers = pipeline::headers(&app.sort);

    // Outer layout: search, table, status
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let search_focused = app.focus == Focus::SearchInput;
    app.search.draw(f, outer[0], search_focused, &app.theme);
    app.beer_table.draw(f, outer[1], &view, &headers, &app.theme);
    draw_status(f, outer[2], app, &view);

    if app.detail.is_open() {
        detail::draw_detail_modal(f, area, app);
    }
}

fn draw_status(f: &mut Frame, area: ratatui::layout::Rect, app: &App, view: &TableView) {
    let theme = &app.theme;

    let (text, fg) = if app.loading {
        ("Loading catalog...".to_string(), theme.accent_colour)
    } else if let Some(error) = &app.last_error {
        (format!("Error: {error} (r to retry)"), theme.error_colour)
    } else {
        (
            format!(
                "{} of {} beers | page {}/{} | j/k rows  h/l pages  n/t/b/v sort  enter detail  o page  q quit",
                view.filtered_len,
                app.catalog.len(),
                view.page_index + 1,
                view.page_count,
            ),
            theme.search_fg,
        )
    };

    f.render_widget(
        Paragraph::new(Line::from(text))
            .style(Style::default().fg(fg).bg(theme.status_bar_colour)),
        area,
    );
}
