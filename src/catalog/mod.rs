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

//! The vehicle catalog.
//!
//! A [`Catalog`] is a fixed, read-only, ordered sequence of cars. It is built
//! once at startup, either from the database or from the built-in sample
//! data, and is then passed explicitly to every query.

mod sample;

use std::collections::HashSet;

use crate::model::{Car, FilterOptions, PriceRange};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cars: Vec<Car>,
}

impl Catalog {
    pub fn new(cars: Vec<Car>) -> Self {
        Self { cars }
    }

    /// The twenty vehicles the application ships with.
    pub fn sample() -> Self {
        Self::new(sample::sample_cars())
    }

    pub fn records(&self) -> &[Car] {
        &self.cars
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Looks up a single car by its id.
    pub fn get(&self, id: u32) -> Option<&Car> {
        self.cars.iter().find(|car| car.id == id)
    }

    /// Derives the distinct filter choices from the full catalog.
    ///
    /// Values are listed in the order they first appear. An empty catalog has
    /// no price range.
    pub fn filter_options(&self) -> FilterOptions {
        let mut options = FilterOptions::default();

        let mut seen_brands = HashSet::new();
        let mut seen_fuel_types = HashSet::new();
        let mut seen_seats = HashSet::new();

        for car in &self.cars {
            if seen_brands.insert(car.brand.as_str()) {
                options.brands.push(car.brand.clone());
            }
            if seen_fuel_types.insert(car.fuel_type.as_str()) {
                options.fuel_types.push(car.fuel_type.clone());
            }
            if seen_seats.insert(car.seating_capacity) {
                options.seating_capacities.push(car.seating_capacity);
            }
        }

        let min = self.cars.iter().map(|car| car.price).min();
        let max = self.cars.iter().map(|car| car.price).max();
        options.price_range = min.zip(max).map(|(min, max)| PriceRange { min, max });

        options
    }
}
