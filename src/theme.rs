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
//! This module defines the application's light and dark color palettes and
//! provides utilities for converting colors between Ratatui's internal
//! representation and external formats (such as hexadecimal strings) used
//! for terminal emulator styling.

use ratatui::style::Color;

use carfinder::preferences::ThemeMode;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Theme {
    pub(crate) mode: ThemeMode,

    pub(crate) background_colour: Color,
    pub(crate) foreground_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) highlight_bg: Color,
    pub(crate) highlight_fg: Color,
    pub(crate) status_bg: Color,

    pub(crate) table_brand_fg: Color,
    pub(crate) table_model_fg: Color,
    pub(crate) table_year_fg: Color,
    pub(crate) table_price_fg: Color,
    pub(crate) table_detail_fg: Color,
    pub(crate) saved_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub(crate) const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub(crate) const fn light() -> Self {
        Self {
            mode: ThemeMode::Light,

            background_colour: Color::Rgb(250, 250, 250),
            foreground_colour: Color::Rgb(23, 23, 23),
            accent_colour: Color::Rgb(37, 99, 235),
            border_colour: Color::Rgb(212, 212, 212),
            muted_colour: Color::Rgb(115, 115, 115),
            highlight_bg: Color::Rgb(219, 234, 254),
            highlight_fg: Color::Rgb(23, 23, 23),
            status_bg: Color::Rgb(229, 229, 229),

            table_brand_fg: Color::Rgb(29, 78, 216),
            table_model_fg: Color::Rgb(23, 23, 23),
            table_year_fg: Color::Rgb(115, 115, 115),
            table_price_fg: Color::Rgb(21, 128, 61),
            table_detail_fg: Color::Rgb(82, 82, 82),
            saved_fg: Color::Rgb(220, 38, 38),
        }
    }

    pub(crate) const fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,

            background_colour: Color::Rgb(10, 10, 10),
            foreground_colour: Color::Rgb(237, 237, 237),
            accent_colour: Color::Rgb(96, 165, 250),
            border_colour: Color::Rgb(64, 64, 64),
            muted_colour: Color::Rgb(163, 163, 163),
            highlight_bg: Color::Rgb(30, 58, 138),
            highlight_fg: Color::Rgb(255, 255, 255),
            status_bg: Color::Rgb(38, 38, 38),

            table_brand_fg: Color::Rgb(147, 197, 253),
            table_model_fg: Color::Rgb(237, 237, 237),
            table_year_fg: Color::Rgb(163, 163, 163),
            table_price_fg: Color::Rgb(74, 222, 128),
            table_detail_fg: Color::Rgb(212, 212, 212),
            saved_fg: Color::Rgb(248, 113, 113),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Only `Rgb` colours have a hex form.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_follow_mode() {
        assert_eq!(Theme::for_mode(ThemeMode::Dark).mode, ThemeMode::Dark);
        assert_eq!(Theme::default().mode, ThemeMode::Light);
    }

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::to_hex(Color::Rgb(10, 10, 10)), Some("#0a0a0a".to_string()));
        assert_eq!(Theme::to_hex(Color::Blue), None);
    }
}
