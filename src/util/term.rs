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

//! Terminal environment and styling utilities.
//!
//! This module changes the terminal emulator's background colour using OSC
//! (Operating System Command) escape sequences, so that areas ratatui does not
//! paint still match the theme.
//!
//! # Compatibility
//!
//! These functions rely on the terminal emulator supporting the specific OSC
//! codes. Most modern terminals (XTerm, iTerm2, Alacritty, Kitty) support these
//! sequences; others ignore them.

use std::io::{self, Write};

use tracing::debug;

use crate::theme::Theme;

/// Sets the terminal background colour using an OSC 11 escape sequence.
///
/// * `hex_colour` - A colour string such as `"#1e1e1e"`.
pub(crate) fn set_terminal_bg(hex_colour: &str) {
    write_sequence(&format!("\x1b]11;{hex_colour}\x07"));
}

/// Resets the terminal background to its default colour with OSC 111.
///
/// This is called during application cleanup to restore the user's terminal.
pub(crate) fn reset_terminal_bg() {
    write_sequence("\x1b]111\x07");
}

/// Matches the terminal background to the theme, if the theme background is
/// an RGB colour.
pub(crate) fn apply_theme_background(theme: &Theme) {
    match Theme::to_hex(theme.background_colour) {
        Some(hex) => set_terminal_bg(&hex),
        None => reset_terminal_bg(),
    }
}

fn write_sequence(sequence: &str) {
    let mut stdout = io::stdout();
    if let Err(e) = stdout.write_all(sequence.as_bytes()).and_then(|_| stdout.flush()) {
        debug!(error = %e, "failed to write terminal escape sequence");
    }
}
