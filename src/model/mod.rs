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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the car finder: the [`Car`]
//! records that make up the catalog, the optional [`FilterCriteria`] a query
//! narrows them with, and the paginated [`QueryResult`] it produces.
//!
//! Cars serialize with camelCase field names, which is the shape the
//! wishlist is persisted in.

mod sort;

use std::ops::Range;

use serde::{Deserialize, Serialize};

pub use sort::{FieldValue, ParseSortError, SortDirection, SortField, SortSpec, locale_compare};

/// A single vehicle listing.
///
/// Cars are immutable once loaded; the catalog hands out shared references
/// and the wishlist keeps its own copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: u32,
    pub brand: String,
    pub model: String,
    pub year: u32,
    pub price: u32,
    pub fuel_type: String,
    pub seating_capacity: u32,
    pub transmission: String,
    pub image: String,
    pub description: String,
}

impl Car {
    /// Returns the value of the given attribute in comparable form.
    pub fn field(&self, field: SortField) -> FieldValue<'_> {
        match field {
            SortField::Id => FieldValue::Number(self.id.into()),
            SortField::Brand => FieldValue::Text(&self.brand),
            SortField::Model => FieldValue::Text(&self.model),
            SortField::Year => FieldValue::Number(self.year.into()),
            SortField::Price => FieldValue::Number(self.price.into()),
            SortField::FuelType => FieldValue::Text(&self.fuel_type),
            SortField::SeatingCapacity => FieldValue::Number(self.seating_capacity.into()),
            SortField::Transmission => FieldValue::Text(&self.transmission),
            SortField::Image => FieldValue::Text(&self.image),
            SortField::Description => FieldValue::Text(&self.description),
        }
    }

    /// The display name, e.g. "Toyota Camry".
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

/// Optional constraints narrowing which cars qualify.
///
/// Every present field is an independent predicate and all of them must hold.
/// An inverted price range is accepted and simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub brand: Option<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub fuel_type: Option<String>,
    pub seating_capacity: Option<u32>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.brand.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.fuel_type.is_none()
            && self.seating_capacity.is_none()
    }

    /// Checks the car against every present predicate.
    ///
    /// Predicates are evaluated in a fixed order: brand, minimum price,
    /// maximum price, fuel type, seating capacity. Both price bounds are
    /// inclusive.
    pub fn matches(&self, car: &Car) -> bool {
        if let Some(brand) = &self.brand {
            if car.brand != *brand {
                return false;
            }
        }

        if let Some(min_price) = self.min_price {
            if car.price < min_price {
                return false;
            }
        }

        if let Some(max_price) = self.max_price {
            if car.price > max_price {
                return false;
            }
        }

        if let Some(fuel_type) = &self.fuel_type {
            if car.fuel_type != *fuel_type {
                return false;
            }
        }

        if let Some(seats) = self.seating_capacity {
            if car.seating_capacity != seats {
                return false;
            }
        }

        true
    }
}

/// Pagination metadata for a query result.
///
/// `page` is 1-indexed. A `limit` of zero cannot be divided into pages and
/// yields zero total pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl Pagination {
    pub fn new(page: usize, limit: usize, total_items: usize) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total_items.div_ceil(limit)
        };

        Self {
            page,
            limit,
            total_items,
            total_pages,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// The index range of the current page within the full result set, or
    /// `None` when the page lies outside it.
    pub fn range(&self) -> Option<Range<usize>> {
        if self.limit == 0 || self.page == 0 {
            return None;
        }

        let start = (self.page - 1).checked_mul(self.limit)?;
        if start >= self.total_items {
            return None;
        }

        let end = start.saturating_add(self.limit).min(self.total_items);
        Some(start..end)
    }
}

/// One page of cars plus the metadata describing where it sits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub results: Vec<Car>,
    pub pagination: Pagination,
}

/// Inclusive price bounds across a set of cars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

/// The distinct filter choices available in a catalog.
///
/// Each list is deduplicated and keeps the order in which values first appear
/// in the catalog. The price range is absent for an empty catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub brands: Vec<String>,
    pub fuel_types: Vec<String>,
    pub seating_capacities: Vec<u32>,
    pub price_range: Option<PriceRange>,
}
