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

//! Wishlist view.
//!
//! Shows every saved car, in the order they were saved. `Space` removes the
//! highlighted car from the wishlist.

mod render;

use crossterm::event::Event;

use carfinder::model::Car;

use crate::{
    actions::Action,
    components::{CarTable, CarTableAction},
};

pub(crate) struct WishlistView {
    pub(crate) car_table: CarTable,
}

impl WishlistView {
    pub(crate) fn new() -> Self {
        Self {
            car_table: CarTable::new(),
        }
    }

    pub(crate) fn set_cars(&mut self, cars: Vec<Car>) {
        self.car_table.set_cars(cars);
    }

    pub(crate) fn cars(&self) -> &[Car] {
        self.car_table.cars()
    }

    pub(crate) fn process_event(&mut self, event: &Event) -> Option<Action> {
        match self.car_table.process_event(event)? {
            CarTableAction::Activate(car) => Some(Action::ShowDetails(car)),
            CarTableAction::ToggleSaved(car) => Some(Action::ToggleSaved(car)),
        }
    }
}
