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

//! Interactive car table widget and state management.
//!
//! This module provides a reusable table component for displaying cars and
//! moving a highlight through them. The table does not decide what a car is
//! used for; activating or saving the highlighted car is reported to the
//! owning view as a [`CarTableAction`].

mod event;
mod render;

use ratatui::widgets::TableState;

use carfinder::model::Car;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CarTableAction {
    Activate(Car),
    ToggleSaved(Car),
}

pub(crate) struct CarTable {
    cars: Vec<Car>,
    table_state: TableState,
}

impl CarTable {
    pub(crate) fn new() -> Self {
        Self {
            cars: vec![],
            table_state: TableState::new(),
        }
    }

    /// Replaces the rows, keeping the highlight on the same row index where
    /// possible.
    pub(crate) fn set_cars(&mut self, cars: Vec<Car>) {
        self.cars = cars;

        let selected = match (self.table_state.selected(), self.cars.len()) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.table_state.select(selected);
    }

    pub(crate) fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub(crate) fn selected(&self) -> Option<&Car> {
        self.table_state.selected().and_then(|i| self.cars.get(i))
    }

    fn goto_next(&mut self) {
        let len = self.cars.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.cars.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.cars.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if let Some(last) = self.cars.len().checked_sub(1) {
            self.table_state.select(Some(last));
        }
    }
}

#[cfg(test)]
mod tests {
    use carfinder::catalog::Catalog;

    use super::*;

    fn table_with(count: usize) -> CarTable {
        let mut table = CarTable::new();
        table.set_cars(Catalog::sample().records()[..count].to_vec());
        table
    }

    #[test]
    fn navigation_wraps() {
        let mut table = table_with(3);
        assert_eq!(table.selected().map(|c| c.id), Some(1));

        table.goto_previous();
        assert_eq!(table.selected().map(|c| c.id), Some(3));

        table.goto_next();
        assert_eq!(table.selected().map(|c| c.id), Some(1));

        table.goto_last();
        table.goto_first();
        assert_eq!(table.selected().map(|c| c.id), Some(1));
    }

    #[test]
    fn shrinking_rows_clamps_highlight() {
        let mut table = table_with(5);
        table.goto_last();

        table.set_cars(Catalog::sample().records()[..2].to_vec());
        assert_eq!(table.selected().map(|c| c.id), Some(2));

        table.set_cars(vec![]);
        assert!(table.selected().is_none());
        table.goto_next();
        assert!(table.selected().is_none());
    }
}
