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
//! This module defines the application's color palette and converts colors to
//! the hexadecimal form terminal emulators accept in escape sequences.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) text_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) popup_colour: Color,
    pub(crate) alert_colour: Color,

    pub(crate) marker_colour: Color,
    pub(crate) marker_selected_colour: Color,
    pub(crate) marker_label_colour: Color,
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
            background_colour: Color::Rgb(18, 32, 38),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            text_colour: Color::Rgb(235, 235, 235),
            muted_colour: Color::Rgb(162, 161, 166),
            popup_colour: Color::Rgb(28, 48, 56),
            alert_colour: Color::Rgb(229, 83, 75),

            marker_colour: Color::Rgb(234, 67, 53),
            marker_selected_colour: Color::Rgb(250, 189, 47),
            marker_label_colour: Color::Rgb(179, 157, 219),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string, or `None` for colours that are not [`Color::Rgb`].
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{r:02x}{g:02x}{b:02x}")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_colours_convert_to_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(18, 32, 255)), Some("#1220ff".to_string()));
        assert_eq!(Theme::to_hex(Color::Red), None);
    }
}
