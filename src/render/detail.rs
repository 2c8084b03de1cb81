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

//! Render the detail view.
//!
//! Two surfaces, one data shape: the inline modal and the full-screen page
//! both display whatever the detail loader currently holds - a loading
//! notice, the fetched record, or the retained error.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::{App, detail::DetailState, theme::Theme};

const MODAL_WIDTH: u16 = 58;
const MODAL_HEIGHT: u16 = 9;

/// Draws the detail modal centered over the catalog view.
pub(crate) fn draw_detail_modal(f: &mut Frame, area: Rect, app: &App) {
    let modal = centered_rect(area, MODAL_WIDTH, MODAL_HEIGHT);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.accent_colour))
        .padding(Padding::uniform(1))
        .title(" Beer Information ")
        .title_bottom(Line::from(" esc to close ").right_aligned());

    f.render_widget(Clear, modal);
    f.render_widget(
        Paragraph::new(detail_lines(app.detail.state(), &app.theme)).block(block),
        modal,
    );
}

/// Draws the full-screen detail page.
pub(crate) fn draw_detail_page(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::uniform(2))
        .title(" Beer Information ")
        .title_bottom(Line::from(" esc to go back ").right_aligned());

    f.render_widget(
        Paragraph::new(detail_lines(app.detail.state(), &app.theme)).block(block),
        area,
    );
}

fn detail_lines<'a>(state: &'a DetailState, theme: &Theme) -> Vec<Line<'a>> {
    match state {
        DetailState::Idle => vec![],

        DetailState::Loading { id } => vec![Line::from(format!("Loading beer {id}..."))],

        DetailState::Loaded(beer) => {
            let label = Style::default().bold().fg(theme.accent_colour);
            vec![
                Line::from(vec![Span::styled("Name          ", label), Span::raw(beer.name.as_str())]),
                Line::from(vec![Span::styled("Tagline       ", label), Span::raw(beer.tagline.as_str())]),
                Line::from(vec![Span::styled("First brewed  ", label), Span::raw(beer.first_brewed.as_str())]),
                Line::from(vec![Span::styled("ABV           ", label), Span::raw(format!("{:.1}%", beer.abv))]),
            ]
        }

        DetailState::Failed(message) => vec![
            Line::from(Span::styled(message.as_str(), Style::default().fg(theme.error_colour))),
        ],
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
