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

//! Sort specifications and the car comparator.

use std::{cmp::Ordering, fmt, str::FromStr};

use icu_collator::{Collator, CollatorBorrowed, options::CollatorOptions};
use thiserror::Error;
use tracing::warn;

use crate::model::Car;

/// The car attribute a result set is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    Brand,
    Model,
    Year,
    Price,
    FuelType,
    SeatingCapacity,
    Transmission,
    Image,
    Description,
}

impl SortField {
    pub const ALL: [SortField; 10] = [
        SortField::Id,
        SortField::Brand,
        SortField::Model,
        SortField::Year,
        SortField::Price,
        SortField::FuelType,
        SortField::SeatingCapacity,
        SortField::Transmission,
        SortField::Image,
        SortField::Description,
    ];

    /// The attribute name as it appears in serialized cars.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Brand => "brand",
            SortField::Model => "model",
            SortField::Year => "year",
            SortField::Price => "price",
            SortField::FuelType => "fuelType",
            SortField::SeatingCapacity => "seatingCapacity",
            SortField::Transmission => "transmission",
            SortField::Image => "image",
            SortField::Description => "description",
        }
    }
}

impl FromStr for SortField {
    type Err = ParseSortError;

    /// Accepts the serialized attribute name, or its snake_case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.replace('_', "").to_ascii_lowercase();
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str().to_ascii_lowercase() == normalised)
            .ok_or_else(|| ParseSortError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(ParseSortError::UnknownDirection(s.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseSortError {
    #[error("expected `field-direction`, got `{0}`")]
    Malformed(String),

    #[error("unknown sort field `{0}`")]
    UnknownField(String),

    #[error("unknown sort direction `{0}`")]
    UnknownDirection(String),
}

/// A field plus a direction, written `price-asc`, `year-desc` and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new(SortField::Price, SortDirection::Asc)
    }
}

impl SortSpec {
    /// The orderings offered by the sort selector, with their labels.
    pub const PRESETS: [(SortSpec, &'static str); 6] = [
        (SortSpec::new(SortField::Price, SortDirection::Asc), "Price: Low to High"),
        (SortSpec::new(SortField::Price, SortDirection::Desc), "Price: High to Low"),
        (SortSpec::new(SortField::Year, SortDirection::Desc), "Year: Newest First"),
        (SortSpec::new(SortField::Year, SortDirection::Asc), "Year: Oldest First"),
        (SortSpec::new(SortField::Brand, SortDirection::Asc), "Brand: A-Z"),
        (SortSpec::new(SortField::Brand, SortDirection::Desc), "Brand: Z-A"),
    ];

    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn label(&self) -> Option<&'static str> {
        SortSpec::PRESETS
            .iter()
            .find(|(spec, _)| spec == self)
            .map(|(_, label)| *label)
    }

    /// The preset following this one, wrapping around. A spec that is not a
    /// preset moves to the first preset.
    pub fn next_preset(&self) -> SortSpec {
        let position = SortSpec::PRESETS.iter().position(|(spec, _)| spec == self);
        match position {
            Some(i) => SortSpec::PRESETS[(i + 1) % SortSpec::PRESETS.len()].0,
            None => SortSpec::PRESETS[0].0,
        }
    }

    /// Orders two cars by this spec.
    ///
    /// Descending order swaps the operands rather than reversing the result,
    /// so equal cars stay equal in both directions.
    pub fn compare(&self, a: &Car, b: &Car) -> Ordering {
        let (a, b) = match self.direction {
            SortDirection::Asc => (a, b),
            SortDirection::Desc => (b, a),
        };

        a.field(self.field).compare(&b.field(self.field))
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.field.as_str(), self.direction.as_str())
    }
}

impl FromStr for SortSpec {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = s
            .trim()
            .rsplit_once('-')
            .ok_or_else(|| ParseSortError::Malformed(s.to_string()))?;

        Ok(SortSpec::new(field.parse()?, direction.parse()?))
    }
}

/// The dynamic value of a car attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Number(i64),
    Text(&'a str),
}

impl FieldValue<'_> {
    /// Numbers compare numerically and text compares with
    /// [`locale_compare`]. Values of different kinds compare equal, which
    /// leaves such pairs where a stable sort found them.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => locale_compare(a, b),
            _ => Ordering::Equal,
        }
    }
}

thread_local! {
    static COLLATOR: Option<CollatorBorrowed<'static>> =
        match Collator::try_new(Default::default(), CollatorOptions::default()) {
            Ok(collator) => Some(collator),
            Err(e) => {
                warn!(error = %e, "root collation data unavailable, sorting text by code point");
                None
            }
        };
}

/// Compares strings the way a user expects to see them listed.
///
/// Uses the Unicode root collation at tertiary strength. Base letters decide
/// first, so `Škoda` sorts between `Saab` and `Tesla`. Accents and then case
/// break ties, with lowercase first.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => fold_compare(a, b),
    })
}

fn fold_compare(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);

    folded_a.cmp(folded_b).then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::car;

    #[test]
    fn parses_selector_values() {
        assert_eq!(
            "price-asc".parse::<SortSpec>(),
            Ok(SortSpec::new(SortField::Price, SortDirection::Asc))
        );
        assert_eq!(
            "year-desc".parse::<SortSpec>(),
            Ok(SortSpec::new(SortField::Year, SortDirection::Desc))
        );
        assert_eq!(
            "fuelType-desc".parse::<SortSpec>(),
            Ok(SortSpec::new(SortField::FuelType, SortDirection::Desc))
        );
        assert_eq!(
            "seating_capacity-asc".parse::<SortSpec>(),
            Ok(SortSpec::new(SortField::SeatingCapacity, SortDirection::Asc))
        );
    }

    #[test]
    fn rejects_bad_selectors() {
        assert_eq!(
            "price".parse::<SortSpec>(),
            Err(ParseSortError::Malformed("price".to_string()))
        );
        assert_eq!(
            "colour-asc".parse::<SortSpec>(),
            Err(ParseSortError::UnknownField("colour".to_string()))
        );
        assert_eq!(
            "price-up".parse::<SortSpec>(),
            Err(ParseSortError::UnknownDirection("up".to_string()))
        );
    }

    #[test]
    fn display_round_trips_presets() {
        for (spec, _) in SortSpec::PRESETS {
            assert_eq!(spec.to_string().parse::<SortSpec>(), Ok(spec));
        }
    }

    #[test]
    fn presets_cycle() {
        let mut spec = SortSpec::default();
        for _ in 0..SortSpec::PRESETS.len() {
            spec = spec.next_preset();
        }
        assert_eq!(spec, SortSpec::default());
        assert_eq!(SortSpec::default().label(), Some("Price: Low to High"));

        let odd = SortSpec::new(SortField::Model, SortDirection::Asc);
        assert_eq!(odd.label(), None);
        assert_eq!(odd.next_preset(), SortSpec::PRESETS[0].0);
    }

    #[test]
    fn mixed_values_compare_equal() {
        assert_eq!(FieldValue::Number(3).compare(&FieldValue::Text("a")), Ordering::Equal);
        assert_eq!(FieldValue::Text("a").compare(&FieldValue::Number(3)), Ordering::Equal);
        assert_eq!(FieldValue::Number(3).compare(&FieldValue::Number(4)), Ordering::Less);
    }

    #[test]
    fn locale_compare_ignores_case_first() {
        assert_eq!(locale_compare("audi", "BMW"), Ordering::Less);
        assert_eq!(locale_compare("Volvo", "acura"), Ordering::Greater);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Lexus", "Lexus"), Ordering::Equal);
    }

    #[test]
    fn locale_compare_places_accented_letters_with_their_base() {
        assert_eq!(locale_compare("Škoda", "Tesla"), Ordering::Less);
        assert_eq!(locale_compare("Škoda", "Saab"), Ordering::Greater);
        assert_eq!(locale_compare("Éclair", "Fiat"), Ordering::Less);
        assert_eq!(locale_compare("Citroën", "Citroen"), Ordering::Greater);
    }

    #[test]
    fn brand_sort_orders_accented_brands() {
        let mut cars = vec![
            car(1, "Tesla", "Model 3", 45000, "Electric", 5),
            car(2, "Škoda", "Octavia", 27000, "Gasoline", 5),
            car(3, "Seat", "Leon", 24000, "Gasoline", 5),
        ];
        let spec = SortSpec::new(SortField::Brand, SortDirection::Asc);

        cars.sort_by(|a, b| spec.compare(a, b));

        let brands: Vec<&str> = cars.iter().map(|c| c.brand.as_str()).collect();
        assert_eq!(brands, ["Seat", "Škoda", "Tesla"]);
    }

    #[test]
    fn descending_swaps_operands() {
        let cheap = car(1, "Honda", "Civic", 22000, "Gasoline", 5);
        let dear = car(2, "Tesla", "Model 3", 45000, "Electric", 5);

        let asc = SortSpec::new(SortField::Price, SortDirection::Asc);
        let desc = SortSpec::new(SortField::Price, SortDirection::Desc);

        assert_eq!(asc.compare(&cheap, &dear), Ordering::Less);
        assert_eq!(desc.compare(&cheap, &dear), Ordering::Greater);
        assert_eq!(desc.compare(&cheap, &cheap), Ordering::Equal);
    }
}
