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

//! The catalog table widget.
//!
//! The table itself is stateless with respect to its rows: the visible page
//! and the header descriptors are recomputed by the pipeline on every draw.
//! What persists here is only the cursor position within the page, wrapped
//! around Ratatui's [`TableState`].

mod render;

use ratatui::widgets::TableState;

pub(crate) struct BeerTableState {
    table_state: TableState,
}

impl BeerTableState {
    pub(crate) fn new() -> Self {
        let mut table_state = TableState::new();
        table_state.select(Some(0));
        Self { table_state }
    }

    /// Cursor row index within the current page.
    pub(crate) fn selected(&self) -> usize {
        self.table_state.selected().unwrap_or(0)
    }

    /// Resets the cursor to the top of the page. Called on page changes and
    /// catalog reloads so the cursor never points past a shrunken page.
    pub(crate) fn reset(&mut self) {
        self.table_state.select(Some(0));
    }

    pub(crate) fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub(crate) fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_at_page_boundaries() {
        let mut state = BeerTableState::new();
        state.goto_previous(3);
        assert_eq!(state.selected(), 2);
        state.goto_next(3);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn cursor_is_inert_on_an_empty_page() {
        let mut state = BeerTableState::new();
        state.goto_next(0);
        state.goto_previous(0);
        assert_eq!(state.selected(), 0);
    }
}
