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

//! Keyboard handling for the car table.

use crossterm::event::{Event, KeyCode};

use crate::components::{CarTable, CarTableAction};

impl CarTable {
    /// Handles navigation keys internally and reports activation (`Enter`)
    /// or save toggling (`Space`) of the highlighted car.
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<CarTableAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(),

            KeyCode::Enter => return self.selected().cloned().map(CarTableAction::Activate),
            KeyCode::Char(' ') => return self.selected().cloned().map(CarTableAction::ToggleSaved),

            _ => {}
        }

        None
    }
}
