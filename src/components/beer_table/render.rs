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

//! UI rendering logic for the catalog table.
//!
//! Draws the current page of derived rows with per-column styling and a
//! direction indicator on the single active sort column.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{
    components::BeerTableState,
    pipeline::{
        ColumnHeader, TableView,
        sort::Direction,
    },
    theme::Theme,
};

impl BeerTableState {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        view: &TableView,
        headers: &[ColumnHeader],
        theme: &Theme,
    ) {
        // The page may have shrunk since the cursor last moved.
        if view.rows.is_empty() {
            self.table_state.select(None);
        } else {
            let selected = self.table_state.selected().unwrap_or(0).min(view.rows.len() - 1);
            self.table_state.select(Some(selected));
        }

        let header_cells = headers.iter().map(|header| {
            let indicator = match header.direction {
                Some(Direction::Ascending) => " ↑",
                Some(Direction::Descending) => " ↓",
                None => "",
            };
            Cell::from(format!("{} [{}]{}", header.label, header.key, indicator))
        });

        let rows = view.rows.iter().map(|beer| {
            let abv = format!("{:.1}%", beer.abv);

            Row::new(vec![
                Cell::from(Line::from(beer.name.as_str()).style(Style::default().fg(theme.table_name_fg))),
                Cell::from(Line::from(beer.tagline.as_str()).style(Style::default().fg(theme.table_tagline_fg))),
                Cell::from(Line::from(beer.first_brewed.as_str()).style(Style::default().fg(theme.table_brewed_fg))),
                Cell::from(Line::from(abv).style(Style::default().fg(theme.table_abv_fg)).alignment(Alignment::Right)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(30),
                Constraint::Percentage(50),
                Constraint::Length(16),
                Constraint::Length(8),
            ],
        )
        .header(
            Row::new(header_cells)
                .style(Style::default().bold().fg(theme.accent_colour))
                .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .block(Block::default());

        let state = &mut self.table_state;
        f.render_stateful_widget(table, area, state);
    }
}
