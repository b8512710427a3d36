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

//! # Car Finder TUI.
//!
//! A terminal-based car listing browser: search, filter, sort and page
//! through the vehicle catalog, open a car's details and keep a wishlist
//! that survives restarts.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background query worker.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, UI rendering, the
//!   wishlist and the theme preference.
//! * A **Query Worker** runs catalog queries after a short loading delay and
//!   posts the results back.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the worker is handled via `std::sync::mpsc` channels.
//! Every query carries a generation number and only results for the latest
//! generation are shown.

mod actions;
mod commander;
mod components;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs::OpenOptions,
    io::{self},
    rc::Rc,
    sync::{
        Arc, Mutex,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Duration,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use carfinder::{
    catalog::Catalog,
    config::{self, AppConfig},
    db,
    model::{Car, FilterOptions, Pagination},
    preferences::{THEME_KEY, ThemePreference},
    query::CarQuery,
    storage::{Slot, SqliteStore},
    wishlist::{WISHLIST_KEY, Wishlist},
};

use crate::{
    actions::{
        commands::AppCommand,
        events::{AppEvent, process_events},
    },
    commander::Commander,
    components::{ListingView, SearchBox, WishlistView},
    theme::Theme,
};

type Store = Rc<SqliteStore>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainView {
    Listing,
    Wishlist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    None,
    Search,
}

/// Application state.
pub(crate) struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub main_view: MainView,
    pub focus: Focus,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub command_tx: Sender<AppCommand>,

    pub catalog: Arc<Catalog>,
    pub filter_options: FilterOptions,

    pub query: CarQuery,
    pub generation: u64,
    pub loading: bool,
    pub pagination: Pagination,

    pub wishlist: Wishlist<Slot<Store>>,
    pub theme_preference: ThemePreference<Slot<Store>>,

    pub listing_view: ListingView,
    pub wishlist_view: WishlistView,
    pub search_box: SearchBox,
    pub commander: Commander,

    pub details: Option<Car>,
    pub status: Option<String>,
}

impl App {
    /// Create a new instance of application state, opening the configured
    /// database.
    pub fn new(config: AppConfig, command_tx: Sender<AppCommand>) -> Result<Self> {
        let mut conn = db::init_db(&config.database_file)
            .with_context(|| format!("Failed to open database {}", config.database_file))?;

        let catalog = db::load_catalog(&mut conn).context("Failed to load catalog")?;
        let store = SqliteStore::new(conn).context("Failed to open key-value store")?;

        Self::with_parts(config, catalog, Rc::new(store), command_tx)
    }

    /// Builds application state around an already loaded catalog and store.
    ///
    /// The wishlist and theme preference are hydrated here, so the returned
    /// state is ready for use.
    pub fn with_parts(
        config: AppConfig,
        catalog: Catalog,
        store: Store,
        command_tx: Sender<AppCommand>,
    ) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let wishlist = Wishlist::open(Slot::new(Rc::clone(&store), WISHLIST_KEY))
            .context("Failed to load wishlist")?;
        let theme_preference = ThemePreference::open(Slot::new(store, THEME_KEY), config.theme)
            .context("Failed to load theme preference")?;

        let query = CarQuery {
            limit: config.page_size(),
            sort: Some(config.default_sort().unwrap_or_default()),
            ..CarQuery::default()
        };

        let filter_options = catalog.filter_options();
        let pagination = Pagination::new(1, query.limit, 0);

        let mut wishlist_view = WishlistView::new();
        wishlist_view.set_cars(wishlist.list().to_vec());

        Ok(Self {
            theme: Theme::for_mode(theme_preference.mode()),
            config,
            main_view: MainView::Listing,
            focus: Focus::None,
            event_tx,
            event_rx,
            command_tx,
            catalog: Arc::new(catalog),
            filter_options,
            query,
            generation: 0,
            loading: false,
            pagination,
            wishlist,
            theme_preference,
            listing_view: ListingView::new(),
            wishlist_view,
            search_box: SearchBox::new(),
            commander: Commander::new(),
            details: None,
            status: None,
        })
    }

    /// Sends the current query to the worker under a new generation.
    ///
    /// Results for any earlier generation still in flight will be discarded
    /// when they arrive.
    pub fn request_query(&mut self) -> Result<()> {
        self.generation += 1;
        self.loading = true;

        self.command_tx.send(AppCommand::Query {
            generation: self.generation,
            query: self.query.clone(),
        })?;

        Ok(())
    }
}

/// The entry point of the application.
///
/// Loads the configuration, sets up logging and the communication channels,
/// initializes the application state, manages the terminal lifecycle, and
/// returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    init_logging(&config.log_file)?;
    info!("carfinder starting");

    let (command_tx, command_rx) = mpsc::channel();

    let mut app = App::new(config, command_tx).context("Failed to initialise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, command_rx);
    restore_terminal(&mut terminal);

    info!("carfinder exiting");

    res.context("Application error occurred")
}

/// Installs the global tracing subscriber.
///
/// The terminal belongs to the UI, so log lines are appended to `path`
/// instead. `RUST_LOG` overrides the default `info` level.
fn init_logging(path: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {path}"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the current theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    util::term::apply_theme_background(&app.theme);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It is best-effort
/// and does not return a result, as it runs during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A query worker to run [`AppCommand`]s against the catalog.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it issues the first query and hands control to
/// [`process_events`].
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    command_rx: Receiver<AppCommand>,
) -> Result<()> {
    let delay = Duration::from_millis(app.config.loading_delay_ms);
    actions::commands::spawn_command_worker(
        Arc::clone(&app.catalog),
        delay,
        command_rx,
        app.event_tx.clone(),
    );

    // Translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Periodic tick, the minimum "frame rate" for rendering the TUI.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Initial trigger to populate the listing
    app.request_query()?;

    process_events(terminal, app)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Application state over an in-memory store and the sample catalog.
    ///
    /// The command receiver is returned so tests can inspect the queries that
    /// were issued.
    pub(crate) fn test_app() -> (App, Receiver<AppCommand>) {
        let (command_tx, command_rx) = mpsc::channel();
        let store = Rc::new(SqliteStore::open_in_memory().unwrap());
        let app = App::with_parts(AppConfig::default(), Catalog::sample(), store, command_tx).unwrap();
        (app, command_rx)
    }

    #[test]
    fn new_app_is_ready() {
        let (app, _rx) = test_app();
        assert_eq!(app.query.page, 1);
        assert_eq!(app.query.limit, 10);
        assert!(app.wishlist.is_empty());
        assert_eq!(app.filter_options.brands.len(), 20);
    }

    #[test]
    fn request_query_bumps_generation() {
        let (mut app, rx) = test_app();
        app.request_query().unwrap();
        app.request_query().unwrap();

        let generations: Vec<u64> = rx
            .try_iter()
            .map(|command| match command {
                AppCommand::Query { generation, .. } => generation,
            })
            .collect();
        assert_eq!(generations, vec![1, 2]);
        assert!(app.loading);
    }
}
