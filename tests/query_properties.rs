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

use proptest::prelude::*;

use carfinder::{
    catalog::Catalog,
    model::{Car, FilterCriteria, SortDirection, SortField, SortSpec},
    query::{CarQuery, query},
};

const BRANDS: [&str; 4] = ["Audi", "BMW", "Tesla", "Volvo"];
const FUELS: [&str; 3] = ["Gasoline", "Electric", "Hybrid"];

fn arb_car() -> impl Strategy<Value = Car> {
    (
        0..BRANDS.len(),
        "[A-Za-z0-9]{1,6}",
        2015u32..2025,
        10_000u32..80_000,
        0..FUELS.len(),
        prop::sample::select(vec![2u32, 4, 5, 7]),
    )
        .prop_map(|(brand, model, year, price, fuel, seats)| Car {
            id: 0,
            brand: BRANDS[brand].to_string(),
            model,
            year,
            price,
            fuel_type: FUELS[fuel].to_string(),
            seating_capacity: seats,
            transmission: "Automatic".to_string(),
            image: String::new(),
            description: String::new(),
        })
}

fn arb_cars() -> impl Strategy<Value = Vec<Car>> {
    prop::collection::vec(arb_car(), 0..40).prop_map(|mut cars| {
        for (i, car) in cars.iter_mut().enumerate() {
            car.id = i as u32 + 1;
        }
        cars
    })
}

fn arb_filters() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::option::of(prop::sample::select(BRANDS.to_vec())),
        prop::option::of(10_000u32..80_000),
        prop::option::of(10_000u32..80_000),
        prop::option::of(prop::sample::select(FUELS.to_vec())),
        prop::option::of(prop::sample::select(vec![2u32, 4, 5, 7])),
    )
        .prop_map(|(brand, min_price, max_price, fuel_type, seating_capacity)| FilterCriteria {
            brand: brand.map(str::to_string),
            min_price,
            max_price,
            fuel_type: fuel_type.map(str::to_string),
            seating_capacity,
        })
}

fn arb_field() -> impl Strategy<Value = SortField> {
    prop::sample::select(SortField::ALL.to_vec())
}

fn arb_direction() -> impl Strategy<Value = SortDirection> {
    prop::sample::select(vec![SortDirection::Asc, SortDirection::Desc])
}

proptest! {
    #[test]
    fn filtered_results_are_correct_and_complete(cars in arb_cars(), filters in arb_filters()) {
        let all = query(&cars, 1, cars.len().max(1), &filters, None, "");

        prop_assert!(all.results.iter().all(|car| filters.matches(car)));

        let expected = cars.iter().filter(|car| filters.matches(car)).count();
        prop_assert_eq!(all.pagination.total_items, expected);
        prop_assert_eq!(all.results.len(), expected);
    }

    #[test]
    fn total_pages_is_ceiling_of_items_over_limit(cars in arb_cars(), limit in 1usize..15) {
        let result = query(&cars, 1, limit, &FilterCriteria::default(), None, "");

        prop_assert_eq!(result.pagination.total_pages, cars.len().div_ceil(limit));
        prop_assert!(result.results.len() <= limit);
    }

    #[test]
    fn pages_concatenate_to_the_full_sorted_sequence(
        cars in arb_cars(),
        filters in arb_filters(),
        search in "[a-z0-9]{0,2}",
        limit in 1usize..15,
        field in arb_field(),
        direction in arb_direction(),
    ) {
        let sort = SortSpec::new(field, direction);
        let everything = query(&cars, 1, cars.len().max(1), &filters, Some(&sort), &search);
        let expected: Vec<u32> = everything.results.iter().map(|car| car.id).collect();

        let first = query(&cars, 1, limit, &filters, Some(&sort), &search);
        let mut seen: Vec<u32> = Vec::new();
        for page in 1..=first.pagination.total_pages {
            let result = query(&cars, page, limit, &filters, Some(&sort), &search);
            seen.extend(result.results.iter().map(|car| car.id));
        }

        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn results_are_ordered_by_the_sort_field(cars in arb_cars(), field in arb_field()) {
        let sort = SortSpec::new(field, SortDirection::Asc);
        let result = query(&cars, 1, cars.len().max(1), &FilterCriteria::default(), Some(&sort), "");

        for pair in result.results.windows(2) {
            prop_assert_ne!(sort.compare(&pair[0], &pair[1]), std::cmp::Ordering::Greater);
        }
    }

    #[test]
    fn descending_reverses_ascending_for_distinct_prices(prices in prop::collection::hash_set(10_000u32..80_000, 0..30)) {
        let cars: Vec<Car> = prices
            .into_iter()
            .enumerate()
            .map(|(i, price)| Car {
                id: i as u32 + 1,
                brand: "Audi".into(),
                model: "A4".into(),
                year: 2020,
                price,
                fuel_type: "Gasoline".into(),
                seating_capacity: 5,
                transmission: "Automatic".into(),
                image: String::new(),
                description: String::new(),
            })
            .collect();
        let limit = cars.len().max(1);

        let asc = SortSpec::new(SortField::Price, SortDirection::Asc);
        let desc = SortSpec::new(SortField::Price, SortDirection::Desc);

        let mut up: Vec<u32> = query(&cars, 1, limit, &FilterCriteria::default(), Some(&asc), "")
            .results.iter().map(|car| car.id).collect();
        let down: Vec<u32> = query(&cars, 1, limit, &FilterCriteria::default(), Some(&desc), "")
            .results.iter().map(|car| car.id).collect();

        up.reverse();
        prop_assert_eq!(up, down);
    }
}

#[test]
fn default_query_pages_the_sample_catalog_by_price() {
    let catalog = Catalog::sample();

    let first = CarQuery::default().run(&catalog);
    assert_eq!(first.results.len(), 10);
    assert_eq!(first.pagination.total_items, 20);
    assert_eq!(first.pagination.total_pages, 2);
    assert_eq!(first.results[0].price, 22000);
    assert!(first.results.iter().all(|car| car.price <= 35000));
    assert!(first.results.windows(2).all(|pair| pair[0].price <= pair[1].price));

    let second = CarQuery {
        page: 2,
        ..CarQuery::default()
    }
    .run(&catalog);
    assert_eq!(second.results.len(), 10);
    assert!(second.results.iter().all(|car| car.price >= 38000));

    let third = CarQuery {
        page: 3,
        ..CarQuery::default()
    }
    .run(&catalog);
    assert!(third.results.is_empty());
    assert_eq!(third.pagination.total_pages, 2);
}

#[test]
fn hybrids_sorted_by_brand() {
    let catalog = Catalog::sample();
    let request = CarQuery {
        filters: FilterCriteria {
            fuel_type: Some("Hybrid".into()),
            ..FilterCriteria::default()
        },
        sort: Some("brand-asc".parse().unwrap()),
        ..CarQuery::default()
    };

    let result = request.run(&catalog);
    let titles: Vec<String> = result.results.iter().map(Car::title).collect();

    assert_eq!(titles, ["Audi Q5", "Hyundai Tucson", "Lexus RX", "Volvo XC60"]);
    assert_eq!(result.pagination.total_pages, 1);
}

#[test]
fn search_is_case_insensitive_over_brand_and_model() {
    let catalog = Catalog::sample();
    let request = CarQuery {
        search: "TES".into(),
        ..CarQuery::default()
    };

    let result = request.run(&catalog);

    assert!(!result.results.is_empty());
    assert!(result.results.iter().all(|car| {
        car.brand.to_lowercase().contains("tes") || car.model.to_lowercase().contains("tes")
    }));
}

#[test]
fn search_whitespace_is_significant() {
    let catalog = Catalog::sample();
    let search = |term: &str| {
        CarQuery {
            search: term.into(),
            ..CarQuery::default()
        }
        .run(&catalog)
        .results
        .iter()
        .map(Car::title)
        .collect::<Vec<String>>()
    };

    assert_eq!(search("3 "), ["BMW 3 Series"]);
    assert_eq!(search("3").len(), 2);
}
