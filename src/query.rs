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

//! Catalog query engine.
//!
//! A query runs four stages over the catalog, always in this order:
//!
//! 1. **Search**: keep cars whose brand or model contains the search term,
//!    ignoring case. An empty term keeps everything.
//! 2. **Filter**: keep cars matching every present [`FilterCriteria`] field.
//! 3. **Sort**: stable-sort by the [`SortSpec`], when one is given.
//! 4. **Paginate**: cut out the requested 1-indexed page.
//!
//! Queries never fail. An empty catalog, an inverted price range, a zero
//! limit or a page past the end all produce a well-formed, possibly empty,
//! result.

use tracing::debug;

use crate::{
    catalog::Catalog,
    model::{Car, FilterCriteria, Pagination, QueryResult, SortSpec},
};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Runs a query over `records` and returns the requested page.
///
/// # Arguments
///
/// * `records` - The full, unfiltered collection.
/// * `page` - The 1-indexed page to return. Page 0, or any page past the
///   last, yields an empty result list.
/// * `limit` - The page size. A zero limit yields zero total pages.
/// * `filters` - Constraints every returned car must satisfy.
/// * `sort` - Optional ordering; without it cars keep catalog order.
/// * `search_term` - Case-insensitive substring matched against brand and
///   model.
pub fn query(
    records: &[Car],
    page: usize,
    limit: usize,
    filters: &FilterCriteria,
    sort: Option<&SortSpec>,
    search_term: &str,
) -> QueryResult {
    let mut matched = search(records, search_term);

    matched.retain(|car| filters.matches(car));

    if let Some(spec) = sort {
        matched.sort_by(|a, b| spec.compare(a, b));
    }

    let pagination = Pagination::new(page, limit, matched.len());
    let results = match pagination.range() {
        Some(range) => matched[range].iter().map(|car| (*car).clone()).collect(),
        None => vec![],
    };

    debug!(
        page,
        limit,
        total_items = pagination.total_items,
        returned = results.len(),
        "query complete"
    );

    QueryResult {
        results,
        pagination,
    }
}

fn search<'a>(records: &'a [Car], search_term: &str) -> Vec<&'a Car> {
    if search_term.is_empty() {
        return records.iter().collect();
    }

    let term = search_term.to_lowercase();
    records
        .iter()
        .filter(|car| {
            car.brand.to_lowercase().contains(&term) || car.model.to_lowercase().contains(&term)
        })
        .collect()
}

/// The full set of parameters for one catalog query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarQuery {
    pub page: usize,
    pub limit: usize,
    pub filters: FilterCriteria,
    pub sort: Option<SortSpec>,
    pub search: String,
}

impl Default for CarQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            filters: FilterCriteria::default(),
            sort: Some(SortSpec::default()),
            search: String::new(),
        }
    }
}

impl CarQuery {
    pub fn run(&self, catalog: &Catalog) -> QueryResult {
        query(
            catalog.records(),
            self.page,
            self.limit,
            &self.filters,
            self.sort.as_ref(),
            &self.search,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SortDirection, SortField, tests::car};

    fn cars() -> Vec<Car> {
        vec![
            car(1, "Toyota", "Camry", 25000, "Gasoline", 5),
            car(2, "Honda", "Civic", 22000, "Gasoline", 5),
            car(3, "Tesla", "Model 3", 45000, "Electric", 5),
            car(4, "Ford", "F-150", 35000, "Gasoline", 6),
            car(5, "Audi", "Q5", 45000, "Hybrid", 5),
        ]
    }

    fn ids(result: &QueryResult) -> Vec<u32> {
        result.results.iter().map(|c| c.id).collect()
    }

    #[test]
    fn no_parameters_returns_catalog_order() {
        let result = query(&cars(), 1, 10, &FilterCriteria::default(), None, "");
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5]);
        assert_eq!(result.pagination.total_pages, 1);
    }

    #[test]
    fn search_matches_brand_or_model_ignoring_case() {
        let filters = FilterCriteria::default();

        assert_eq!(ids(&query(&cars(), 1, 10, &filters, None, "CIV")), vec![2]);
        assert_eq!(ids(&query(&cars(), 1, 10, &filters, None, "tes")), vec![3]);
        assert_eq!(ids(&query(&cars(), 1, 10, &filters, None, "o")), vec![1, 2, 3, 4]);
        assert!(query(&cars(), 1, 10, &filters, None, "zzz").results.is_empty());
    }

    #[test]
    fn search_runs_before_filters() {
        let filters = FilterCriteria {
            fuel_type: Some("Gasoline".to_string()),
            ..Default::default()
        };

        let result = query(&cars(), 1, 10, &filters, None, "model");
        assert!(result.results.is_empty());
        assert_eq!(result.pagination.total_items, 0);
        assert_eq!(result.pagination.total_pages, 0);
    }

    #[test]
    fn equal_keys_keep_their_relative_order() {
        let sort = SortSpec::new(SortField::Price, SortDirection::Desc);
        let result = query(&cars(), 1, 10, &FilterCriteria::default(), Some(&sort), "");
        assert_eq!(ids(&result), vec![3, 5, 4, 1, 2]);

        let sort = SortSpec::new(SortField::Price, SortDirection::Asc);
        let result = query(&cars(), 1, 10, &FilterCriteria::default(), Some(&sort), "");
        assert_eq!(ids(&result), vec![2, 1, 4, 3, 5]);
    }

    #[test]
    fn zero_limit_has_no_pages() {
        let result = query(&cars(), 1, 0, &FilterCriteria::default(), None, "");
        assert!(result.results.is_empty());
        assert_eq!(result.pagination.total_items, 5);
        assert_eq!(result.pagination.total_pages, 0);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let filters = FilterCriteria::default();
        assert!(query(&cars(), 0, 2, &filters, None, "").results.is_empty());
        assert!(query(&cars(), 4, 2, &filters, None, "").results.is_empty());
        assert_eq!(ids(&query(&cars(), 3, 2, &filters, None, "")), vec![5]);
    }

    #[test]
    fn empty_catalog_is_well_formed() {
        let result = query(&[], 1, 10, &FilterCriteria::default(), None, "anything");
        assert!(result.results.is_empty());
        assert_eq!(result.pagination, Pagination::new(1, 10, 0));
    }

    #[test]
    fn car_query_defaults_to_cheapest_first() {
        let catalog = Catalog::new(cars());
        let result = CarQuery::default().run(&catalog);
        assert_eq!(ids(&result), vec![2, 1, 4, 3, 5]);
        assert_eq!(result.pagination.limit, DEFAULT_PAGE_SIZE);
    }
}
