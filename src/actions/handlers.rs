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

//! Applies user actions to the application state.
//!
//! Changing the search term, a filter or the sort order always returns to the
//! first page and issues a new query. Page navigation is clamped to the pages
//! of the latest result, so the query engine is never asked for a page the
//! user cannot see.

use anyhow::Result;
use tracing::{error, info};

use carfinder::{
    model::{FilterCriteria, PriceRange},
    query::CarQuery,
};

use crate::{
    App, MainView,
    actions::{Action, events::AppEvent},
    theme::Theme,
};

pub(crate) fn apply_action(app: &mut App, action: Action) -> Result<()> {
    match action {
        Action::Search(term) => update_query(app, |q| q.search = term)?,

        Action::SetBrand(brand) => update_query(app, |q| q.filters.brand = brand)?,
        Action::CycleBrand => {
            let next = cycle(app.query.filters.brand.as_ref(), &app.filter_options.brands);
            update_query(app, |q| q.filters.brand = next)?
        }
        Action::SetFuelType(fuel_type) => update_query(app, |q| q.filters.fuel_type = fuel_type)?,
        Action::CycleFuelType => {
            let next = cycle(app.query.filters.fuel_type.as_ref(), &app.filter_options.fuel_types);
            update_query(app, |q| q.filters.fuel_type = next)?
        }
        Action::SetSeats(seats) => update_query(app, |q| q.filters.seating_capacity = seats)?,
        Action::CycleSeats => {
            let next = cycle(
                app.query.filters.seating_capacity.as_ref(),
                &app.filter_options.seating_capacities,
            );
            update_query(app, |q| q.filters.seating_capacity = next)?
        }
        Action::SetMinPrice(price) => update_query(app, |q| q.filters.min_price = price)?,
        Action::AdjustMinPrice(delta) => {
            let range = app.filter_options.price_range;
            let next = adjust_price(app.query.filters.min_price, delta, range, |r| r.min);
            update_query(app, |q| q.filters.min_price = next)?
        }
        Action::SetMaxPrice(price) => update_query(app, |q| q.filters.max_price = price)?,
        Action::AdjustMaxPrice(delta) => {
            let range = app.filter_options.price_range;
            let next = adjust_price(app.query.filters.max_price, delta, range, |r| r.max);
            update_query(app, |q| q.filters.max_price = next)?
        }
        Action::ResetFilters => update_query(app, |q| q.filters = FilterCriteria::default())?,

        Action::SetSort(spec) => update_query(app, |q| q.sort = Some(spec))?,
        Action::CycleSort => {
            let next = app.query.sort.unwrap_or_default().next_preset();
            update_query(app, |q| q.sort = Some(next))?
        }

        Action::GotoPage(page) => goto_page(app, page)?,
        Action::NextPage => goto_page(app, app.query.page.saturating_add(1))?,
        Action::PreviousPage => goto_page(app, app.query.page.saturating_sub(1))?,

        Action::ShowView(view) => app.main_view = view,
        Action::ToggleWishlistView => {
            app.main_view = match app.main_view {
                MainView::Listing => MainView::Wishlist,
                MainView::Wishlist => MainView::Listing,
            }
        }

        Action::ToggleSaved(car) => {
            let title = car.title();
            match app.wishlist.toggle(&car) {
                Ok(true) => app.status = Some(format!("Saved {title} to wishlist")),
                Ok(false) => app.status = Some(format!("Removed {title} from wishlist")),
                Err(e) => {
                    error!(error = %e, car_id = car.id, "Failed to persist wishlist");
                    app.status = Some(format!("Wishlist not saved: {e}"));
                }
            }
            app.wishlist_view.set_cars(app.wishlist.list().to_vec());
        }
        Action::ShowDetails(car) => app.details = Some(car),
        Action::CloseDetails => app.details = None,

        Action::ToggleTheme => match app.theme_preference.toggle() {
            Ok(mode) => {
                info!(%mode, "Theme changed");
                app.theme = Theme::for_mode(mode);
                crate::util::term::apply_theme_background(&app.theme);
            }
            Err(e) => {
                error!(error = %e, "Failed to persist theme");
                app.status = Some(format!("Theme not saved: {e}"));
            }
        },

        Action::Quit => app.event_tx.send(AppEvent::ExitApplication)?,
    }

    Ok(())
}

/// Changes the query, returns to the first page and re-runs it.
fn update_query(app: &mut App, change: impl FnOnce(&mut CarQuery)) -> Result<()> {
    change(&mut app.query);
    app.query.page = 1;
    app.request_query()
}

fn goto_page(app: &mut App, page: usize) -> Result<()> {
    let target = clamp_page(page, app.pagination.total_pages);
    if target == app.query.page {
        return Ok(());
    }

    app.query.page = target;
    app.request_query()
}

fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Steps through `options`: no selection, then each option in turn, then back
/// to no selection. A value that is not among the options also resets.
fn cycle<T: Clone + PartialEq>(current: Option<&T>, options: &[T]) -> Option<T> {
    match current {
        None => options.first().cloned(),
        Some(value) => options
            .iter()
            .position(|o| o == value)
            .and_then(|i| options.get(i + 1))
            .cloned(),
    }
}

/// Moves a price bound by `delta`, starting from the catalog's bound when
/// unset, and keeps it inside the catalog's price range.
fn adjust_price(
    current: Option<u32>,
    delta: i64,
    range: Option<PriceRange>,
    start: fn(&PriceRange) -> u32,
) -> Option<u32> {
    let Some(range) = range else {
        return current;
    };

    let base = i64::from(current.unwrap_or_else(|| start(&range)));
    let next = (base + delta).clamp(i64::from(range.min), i64::from(range.max));

    u32::try_from(next).ok()
}

#[cfg(test)]
mod tests {
    use carfinder::model::{Car, SortDirection, SortField, SortSpec};

    use super::*;
    use crate::{actions::commands::AppCommand, tests::test_app};

    fn last_query(rx: &std::sync::mpsc::Receiver<AppCommand>) -> CarQuery {
        match rx.try_iter().last().expect("a query was issued") {
            AppCommand::Query { query, .. } => query,
        }
    }

    fn sample_car(app: &App, id: u32) -> Car {
        app.catalog.get(id).cloned().unwrap()
    }

    #[test]
    fn cycle_walks_options_then_clears() {
        let options = vec!["a", "b"];
        assert_eq!(cycle(None, &options), Some("a"));
        assert_eq!(cycle(Some(&"a"), &options), Some("b"));
        assert_eq!(cycle(Some(&"b"), &options), None);
        assert_eq!(cycle(Some(&"z"), &options), None);
        assert_eq!(cycle::<&str>(None, &[]), None);
    }

    #[test]
    fn adjust_price_starts_at_bound_and_clamps() {
        let range = Some(PriceRange {
            min: 22000,
            max: 70000,
        });

        assert_eq!(adjust_price(None, 1000, range, |r| r.min), Some(23000));
        assert_eq!(adjust_price(None, -1000, range, |r| r.max), Some(69000));
        assert_eq!(adjust_price(Some(22500), -1000, range, |r| r.min), Some(22000));
        assert_eq!(adjust_price(Some(69500), 1000, range, |r| r.max), Some(70000));
        assert_eq!(adjust_price(Some(5), 1000, None, |r| r.min), Some(5));
    }

    #[test]
    fn clamp_page_stays_in_range() {
        assert_eq!(clamp_page(0, 2), 1);
        assert_eq!(clamp_page(3, 2), 2);
        assert_eq!(clamp_page(5, 0), 1);
    }

    #[test]
    fn filter_change_resets_to_first_page() {
        let (mut app, rx) = test_app();
        app.pagination.total_pages = 2;

        apply_action(&mut app, Action::NextPage).unwrap();
        assert_eq!(last_query(&rx).page, 2);

        apply_action(&mut app, Action::SetFuelType(Some("Hybrid".to_string()))).unwrap();
        let query = last_query(&rx);
        assert_eq!(query.page, 1);
        assert_eq!(query.filters.fuel_type.as_deref(), Some("Hybrid"));
    }

    #[test]
    fn paging_past_the_end_does_not_query() {
        let (mut app, rx) = test_app();
        app.pagination.total_pages = 1;

        apply_action(&mut app, Action::NextPage).unwrap();
        apply_action(&mut app, Action::PreviousPage).unwrap();
        apply_action(&mut app, Action::GotoPage(9)).unwrap();

        assert_eq!(rx.try_iter().count(), 0);
        assert_eq!(app.query.page, 1);
    }

    #[test]
    fn cycle_sort_follows_presets() {
        let (mut app, rx) = test_app();
        apply_action(&mut app, Action::CycleSort).unwrap();
        assert_eq!(
            last_query(&rx).sort,
            Some(SortSpec::new(SortField::Price, SortDirection::Desc))
        );
    }

    #[test]
    fn reset_filters_keeps_search() {
        let (mut app, _rx) = test_app();
        apply_action(&mut app, Action::Search("a".to_string())).unwrap();
        apply_action(&mut app, Action::CycleBrand).unwrap();
        assert_eq!(app.query.filters.brand.as_deref(), Some("Toyota"));

        apply_action(&mut app, Action::ResetFilters).unwrap();
        assert!(app.query.filters.is_empty());
        assert_eq!(app.query.search, "a");
    }

    #[test]
    fn toggle_saved_updates_wishlist_view() {
        let (mut app, _rx) = test_app();
        let car = sample_car(&app, 7);

        apply_action(&mut app, Action::ToggleSaved(car.clone())).unwrap();
        assert!(app.wishlist.contains(7));
        assert_eq!(app.wishlist_view.cars().len(), 1);
        assert_eq!(app.status.as_deref(), Some("Saved Audi Q5 to wishlist"));

        apply_action(&mut app, Action::ToggleSaved(car)).unwrap();
        assert!(app.wishlist_view.cars().is_empty());
    }

    #[test]
    fn toggle_views() {
        let (mut app, _rx) = test_app();
        apply_action(&mut app, Action::ToggleWishlistView).unwrap();
        assert_eq!(app.main_view, MainView::Wishlist);
        apply_action(&mut app, Action::ShowView(MainView::Listing)).unwrap();
        assert_eq!(app.main_view, MainView::Listing);
    }

    #[test]
    fn quit_posts_exit_event() {
        let (mut app, _rx) = test_app();
        apply_action(&mut app, Action::Quit).unwrap();
        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }
}
