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

//! The persisted wishlist.
//!
//! A [`Wishlist`] is an ordered set of saved cars, unique by id, kept in
//! insertion order. Every mutation writes the full list back through its
//! [`StoragePort`] as a JSON array of car objects.
//!
//! # Hydration
//!
//! [`Wishlist::open`] reads the stored list once and returns a ready
//! wishlist. Stored data that cannot be parsed is not an error: the wishlist
//! starts empty and the slot is overwritten with an empty list, so the
//! corruption is never seen again.

use tracing::{debug, warn};

use crate::{
    model::Car,
    storage::{self, StoragePort},
};

/// The storage key the wishlist is persisted under.
pub const WISHLIST_KEY: &str = "carWishlist";

pub struct Wishlist<P> {
    cars: Vec<Car>,
    port: P,
}

impl<P: StoragePort> Wishlist<P> {
    /// Hydrates a wishlist from `port`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage backend itself fails. Unparseable
    /// data is discarded and replaced with an empty list.
    pub fn open(mut port: P) -> storage::Result<Self> {
        let cars = match port.load()? {
            None => vec![],
            Some(bytes) => match serde_json::from_slice::<Vec<Car>>(&bytes) {
                Ok(cars) => dedup_by_id(cars),
                Err(e) => {
                    warn!(error = %e, "Failed to parse stored wishlist, resetting it");
                    port.save(b"[]")?;
                    vec![]
                }
            },
        };

        debug!(count = cars.len(), "wishlist hydrated");

        Ok(Self { cars, port })
    }

    /// Appends `car` unless a car with the same id is already saved.
    ///
    /// Returns `true` if the car was added. The list is persisted only when
    /// it changes; if persisting fails the in-memory change is kept.
    pub fn add(&mut self, car: Car) -> storage::Result<bool> {
        if self.contains(car.id) {
            return Ok(false);
        }

        self.cars.push(car);
        self.persist()?;

        Ok(true)
    }

    /// Removes the car with the given id, returning `true` if it was saved.
    pub fn remove(&mut self, id: u32) -> storage::Result<bool> {
        let before = self.cars.len();
        self.cars.retain(|car| car.id != id);

        if self.cars.len() == before {
            return Ok(false);
        }

        self.persist()?;

        Ok(true)
    }

    /// Adds the car if it is not saved, removes it if it is. Returns whether
    /// the car is saved afterwards.
    pub fn toggle(&mut self, car: &Car) -> storage::Result<bool> {
        if self.contains(car.id) {
            self.remove(car.id)?;
            Ok(false)
        } else {
            self.add(car.clone())?;
            Ok(true)
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.cars.iter().any(|car| car.id == id)
    }

    pub fn list(&self) -> &[Car] {
        &self.cars
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    fn persist(&mut self) -> storage::Result<()> {
        // Vec<Car> has only string and integer fields, serializing cannot fail.
        let bytes = serde_json::to_vec(&self.cars).unwrap_or_else(|_| b"[]".to_vec());
        self.port.save(&bytes)
    }
}

fn dedup_by_id(cars: Vec<Car>) -> Vec<Car> {
    let mut unique: Vec<Car> = Vec::with_capacity(cars.len());
    for car in cars {
        if !unique.iter().any(|c| c.id == car.id) {
            unique.push(car);
        }
    }
    unique
}
