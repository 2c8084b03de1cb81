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

//! Render the search input.
//!
//! Draws the current filter text inside a bordered box; the border takes the
//! accent colour and the terminal cursor is positioned in the buffer while
//! the input has focus.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{components::SearchInput, theme::Theme};

impl SearchInput {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let border_colour = if focused {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .padding(Padding::horizontal(1))
            .title(" Search [/] ");

        f.render_widget(
            Paragraph::new(self.value()).style(Style::default().fg(theme.search_fg)).block(block),
            area,
        );

        if focused {
            f.set_cursor_position(self.cursor_position(area));
        }
    }

    /// Terminal cursor position for the input buffer.
    ///
    /// Border plus padding offset the buffer by two columns; a filter longer
    /// than the box clamps to the right edge rather than escaping it.
    fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let cursor_x = (area.x + 2)
            .saturating_add(self.input.cursor() as u16)
            .min(area.right().saturating_sub(2));
        (cursor_x, area.y + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    fn typed(text: &str) -> SearchInput {
        let mut search = SearchInput::new();
        for c in text.chars() {
            search.process_event(&Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
        }
        search
    }

    #[test]
    fn cursor_tracks_a_short_filter() {
        let area = Rect::new(0, 0, 40, 3);
        assert_eq!(typed("ipa").cursor_position(area), (5, 1));
    }

    #[test]
    fn cursor_clamps_inside_a_narrow_box() {
        let area = Rect::new(0, 0, 12, 3);
        let (x, y) = typed("imperial russian stout").cursor_position(area);
        assert_eq!(x, area.right() - 2);
        assert_eq!(y, 1);
    }
}
