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

//! Search input component.
//!
//! Wraps a managed text input whose current value IS the filter text: every
//! keystroke is immediately visible to the next pipeline recomputation, there
//! is no submit step. Focus handling lives with the application; this
//! component only edits the buffer and reports when focus should return to
//! the table.

mod event;
mod render;

use tui_input::Input;

pub(crate) struct SearchInput {
    input: Input,
}

impl SearchInput {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
        }
    }

    /// The current filter text.
    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }
}
