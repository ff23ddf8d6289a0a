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
//! This module defines the application's color palette.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,

    pub(crate) title_fg: Color,
    pub(crate) muted_fg: Color,
    pub(crate) thumbnail_bg: Color,
    pub(crate) thumbnail_fg: Color,

    pub(crate) highlight_bg: Color,
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
            background_colour: Color::Rgb(24, 24, 27),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(229, 231, 235),

            title_fg: Color::Rgb(255, 255, 255),
            muted_fg: Color::Rgb(107, 114, 128),
            thumbnail_bg: Color::Rgb(63, 63, 70),
            thumbnail_fg: Color::Rgb(179, 157, 219),

            highlight_bg: Color::Rgb(39, 39, 42),
        }
    }
}
