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

//! Command-line input logic and state management.
//!
//! This module implements a command-line component: `:` opens it, typed text
//! goes to a text input, and `Enter` parses the text into an [`Action`] that
//! is posted to the application event loop.
//!
//! # Commands
//!
//! | Command            | Effect                                  |
//! |--------------------|-----------------------------------------|
//! | `q`                | Quit                                    |
//! | `search TERM`      | Search brand and model                  |
//! | `brand [NAME]`     | Filter by brand, or clear the filter    |
//! | `fuel [NAME]`      | Filter by fuel type, or clear           |
//! | `seats [N]`        | Filter by seating capacity, or clear    |
//! | `min [N]`          | Minimum price, or clear                 |
//! | `max [N]`          | Maximum price, or clear                 |
//! | `reset`            | Clear all filters                       |
//! | `sort FIELD-DIR`   | Sort, e.g. `sort year-desc`             |
//! | `page N`           | Go to a page                            |
//! | `1`, `2`, `w`      | Show listing, wishlist, or toggle       |
//! | `theme`            | Toggle light/dark                       |

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use carfinder::model::SortSpec;

use crate::{
    MainView,
    actions::{Action, events::AppEvent},
};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers a terminal event to the commander.
    ///
    /// Returns `true` if the event was consumed. While active, the commander
    /// consumes every key event.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let outcome = parse_command(self.input.value());
                self.input.reset();
                self.active = false;

                match outcome {
                    Ok(Some(action)) => event_tx.send(AppEvent::Action(action))?,
                    Ok(None) => {}
                    Err(message) => event_tx.send(AppEvent::Error(message))?,
                }
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }
}

/// Parses one command line into an action.
///
/// An empty line is not an error and yields no action.
pub(crate) fn parse_command(buffer: &str) -> Result<Option<Action>, String> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let action = match parts.as_slice() {
        [] => return Ok(None),

        ["q"] | ["quit"] => Action::Quit,

        ["search", term @ ..] => Action::Search(term.join(" ")),

        ["brand"] => Action::SetBrand(None),
        ["brand", name @ ..] => Action::SetBrand(Some(name.join(" "))),
        ["fuel"] => Action::SetFuelType(None),
        ["fuel", name @ ..] => Action::SetFuelType(Some(name.join(" "))),
        ["seats"] => Action::SetSeats(None),
        ["seats", n] => Action::SetSeats(Some(parse_number(n)?)),
        ["min"] => Action::SetMinPrice(None),
        ["min", n] => Action::SetMinPrice(Some(parse_number(n)?)),
        ["max"] => Action::SetMaxPrice(None),
        ["max", n] => Action::SetMaxPrice(Some(parse_number(n)?)),
        ["reset"] => Action::ResetFilters,

        ["sort", spec] => Action::SetSort(spec.parse::<SortSpec>().map_err(|e| e.to_string())?),

        ["page", n] => Action::GotoPage(parse_number(n)?),

        ["1"] => Action::ShowView(MainView::Listing),
        ["2"] => Action::ShowView(MainView::Wishlist),
        ["w"] | ["wishlist"] => Action::ToggleWishlistView,

        ["theme"] => Action::ToggleTheme,

        [cmd, ..] => return Err(format!("Unknown command: {cmd}")),
    };

    Ok(Some(action))
}

/// Parses a whole number, allowing `_` and `,` as digit separators.
fn parse_number<T: std::str::FromStr>(text: &str) -> Result<T, String> {
    let digits: String = text.chars().filter(|c| *c != '_' && *c != ',').collect();
    digits.parse().map_err(|_| format!("Not a number: {text}"))
}
