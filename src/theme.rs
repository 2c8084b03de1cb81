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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) status_bar_colour: Color,
    pub(crate) error_colour: Color,

    pub(crate) search_fg: Color,

    pub(crate) table_name_fg: Color,
    pub(crate) table_tagline_fg: Color,
    pub(crate) table_brewed_fg: Color,
    pub(crate) table_abv_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(30, 25, 20),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            status_bar_colour: Color::Rgb(50, 42, 34),
            error_colour: Color::Rgb(251, 73, 52),

            search_fg: Color::Rgb(255, 255, 255),

            table_name_fg: Color::Rgb(255, 255, 255),
            table_tagline_fg: Color::Rgb(179, 157, 219),
            table_brewed_fg: Color::Rgb(162, 161, 166),
            table_abv_fg: Color::Rgb(255, 215, 0),
        }
    }

    /// The background colour as a CSS-style hexadecimal string, used to set
    /// the terminal emulator's background via escape sequences.
    ///
    /// Non-RGB entries fall back to black rather than failing; the palette
    /// above only holds `Rgb` values.
    pub(crate) fn background_hex(&self) -> String {
        match self.background_colour {
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            _ => "#000000".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_hex_matches_the_palette() {
        assert_eq!(Theme::default().background_hex(), "#1e1914");
    }

    #[test]
    fn non_rgb_background_falls_back_to_black() {
        let theme = Theme {
            background_colour: Color::Reset,
            ..Theme::default()
        };
        assert_eq!(theme.background_hex(), "#000000");
    }
}
