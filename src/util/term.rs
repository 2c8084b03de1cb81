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

//! Terminal emulator styling via OSC escape sequences.
//!
//! Requires a terminal emulator that honors OSC 11/111 (XTerm, iTerm2,
//! Alacritty, Kitty and most other modern emulators do).

use std::io::{self, Write};

/// Sets the terminal background color (OSC 11) to the given hex string,
/// e.g. `"#1e1914"`. Flushes immediately so the change applies before the
/// first frame is drawn.
pub(crate) fn set_terminal_bg(hex_color: &str) {
    print!("\x1b]11;{}\x07", hex_color);
    io::stdout().flush().ok();
}

/// Reverts the terminal background (OSC 111) to the user's own
/// configuration. Called during cleanup.
pub(crate) fn reset_terminal_bg() {
    print!("\x1b]111\x07");
    io::stdout().flush().ok();
}
