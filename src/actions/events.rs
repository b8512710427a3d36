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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker updates
//! (query results), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function routes key presses to the
//!    focused component, turns them into [`Action`]s and applies them.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::{debug, error};

use carfinder::model::QueryResult;

use crate::{
    App, Focus, MainView,
    actions::{Action, handlers::apply_action},
    components::SearchBoxAction,
    render::draw,
};

const PRICE_STEP: i64 = 1000;

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Action(Action),

    QueryResults { generation: u64, result: QueryResult },

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Action(action) => apply_action(app, action)?,
        AppEvent::QueryResults { generation, result } => receive_results(app, generation, result),
        AppEvent::Error(message) => {
            error!(%message, "Command failed");
            app.status = Some(message);
        }
        AppEvent::Tick | AppEvent::ExitApplication => {}
    }

    Ok(())
}

/// Applies query results, unless a newer query has been issued since.
///
/// Results are applied whole or not at all.
fn receive_results(app: &mut App, generation: u64, result: QueryResult) {
    if generation != app.generation {
        debug!(generation, latest = app.generation, "Discarding stale query results");
        return;
    }

    app.loading = false;
    app.pagination = result.pagination;
    app.listing_view.set_cars(result.results);
}

/// Maps keyboard input to application actions.
///
/// Input is offered, in order, to the commander, the search box when it has
/// focus, the details popup when it is open, the table of the current view,
/// and finally the global shortcuts.
///
/// # Errors
///
/// Returns an error if an action cannot be applied, for example when the
/// query worker has gone away.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let event = Event::Key(key);

    if app.commander.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    if app.focus == Focus::Search {
        match app.search_box.process_event(&event) {
            Some(SearchBoxAction::Submit(term)) => {
                app.focus = Focus::None;
                return apply_action(app, Action::Search(term));
            }
            Some(SearchBoxAction::Cancel) => app.focus = Focus::None,
            None => {}
        }
        return Ok(());
    }

    if let Some(car) = &app.details {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Action::CloseDetails),
            KeyCode::Char(' ') => Some(Action::ToggleSaved(car.clone())),
            _ => None,
        };
        if let Some(action) = action {
            apply_action(app, action)?;
        }
        return Ok(());
    }

    let table_action = match app.main_view {
        MainView::Listing => app.listing_view.process_event(&event),
        MainView::Wishlist => app.wishlist_view.process_event(&event),
    };
    if let Some(action) = table_action {
        return apply_action(app, action);
    }

    match global_key_action(key) {
        Some(Action::Search(_)) => {
            app.focus = Focus::Search;
            Ok(())
        }
        Some(action) => apply_action(app, action),
        None => Ok(()),
    }
}

/// Shortcuts that apply regardless of the current view.
///
/// `/` is reported as an empty search and means "focus the search box".
fn global_key_action(key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('/') => Action::Search(String::new()),

        KeyCode::Char('b') => Action::CycleBrand,
        KeyCode::Char('f') => Action::CycleFuelType,
        KeyCode::Char('c') => Action::CycleSeats,
        KeyCode::Char('[') => Action::AdjustMinPrice(-PRICE_STEP),
        KeyCode::Char(']') => Action::AdjustMinPrice(PRICE_STEP),
        KeyCode::Char('{') => Action::AdjustMaxPrice(-PRICE_STEP),
        KeyCode::Char('}') => Action::AdjustMaxPrice(PRICE_STEP),
        KeyCode::Char('x') => Action::ResetFilters,

        KeyCode::Char('o') => Action::CycleSort,

        KeyCode::Char('n') | KeyCode::Right => Action::NextPage,
        KeyCode::Char('p') | KeyCode::Left => Action::PreviousPage,

        KeyCode::Char('w') => Action::ToggleWishlistView,
        KeyCode::Char('1') => Action::ShowView(MainView::Listing),
        KeyCode::Char('2') => Action::ShowView(MainView::Wishlist),

        KeyCode::Char('t') => Action::ToggleTheme,

        _ => return None,
    };

    Some(action)
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::{actions::commands::AppCommand, tests::test_app};

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn results_for(app: &App) -> QueryResult {
        app.query.run(&app.catalog)
    }

    #[test]
    fn stale_results_are_discarded() {
        let (mut app, _rx) = test_app();
        app.request_query().unwrap();
        let stale = results_for(&app);

        app.query.page = 2;
        app.request_query().unwrap();
        let fresh = results_for(&app);

        handle_event(&mut app, AppEvent::QueryResults { generation: 1, result: stale }).unwrap();
        assert!(app.loading);
        assert!(app.listing_view.cars().is_empty());

        handle_event(&mut app, AppEvent::QueryResults { generation: 2, result: fresh.clone() }).unwrap();
        assert!(!app.loading);
        assert_eq!(app.listing_view.cars(), fresh.results.as_slice());
        assert_eq!(app.pagination.page, 2);
    }

    #[test]
    fn slash_focuses_search_and_enter_submits() {
        let (mut app, rx) = test_app();

        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.focus, Focus::Search);

        for c in "tes".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.focus, Focus::None);
        assert_eq!(app.query.search, "tes");

        let last = rx.try_iter().last().unwrap();
        match last {
            AppCommand::Query { query, .. } => assert_eq!(query.search, "tes"),
        }
    }

    #[test]
    fn keys_typed_in_search_do_not_trigger_shortcuts() {
        let (mut app, _rx) = test_app();

        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('w'));

        assert_eq!(app.main_view, MainView::Listing);
        assert_eq!(app.search_box.value(), "qw");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::None);
        assert_eq!(app.query.search, "");
    }

    #[test]
    fn details_popup_captures_keys() {
        let (mut app, _rx) = test_app();
        let fresh = results_for(&app);
        app.listing_view.set_cars(fresh.results);

        press(&mut app, KeyCode::Enter);
        let shown = app.details.clone().unwrap();
        assert_eq!(shown.id, 2);

        press(&mut app, KeyCode::Char(' '));
        assert!(app.wishlist.contains(shown.id));

        press(&mut app, KeyCode::Char('w'));
        assert_eq!(app.main_view, MainView::Listing);

        press(&mut app, KeyCode::Esc);
        assert!(app.details.is_none());
    }

    #[test]
    fn global_shortcuts_map_to_actions() {
        let key = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        assert_eq!(global_key_action(key('o')), Some(Action::CycleSort));
        assert_eq!(global_key_action(key(']')), Some(Action::AdjustMinPrice(PRICE_STEP)));
        assert_eq!(global_key_action(key('z')), None);
    }
}
