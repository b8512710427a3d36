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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! event so that the interface always reflects the latest state.

mod commander;
mod filters;
pub(crate) mod icons;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::{
    App, Focus, MainView,
    components::draw_details,
    render::{commander::draw_commander, filters::draw_filters},
};

/// Renders the user interface to the terminal frame.
///
/// The screen is split, top to bottom, into the search box, the filter bar,
/// the current view and the command line. The details popup, when open, is
/// drawn over everything else.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    app.search_box
        .draw(f, outer[0], app.focus == Focus::Search, &app.theme);

    draw_filters(f, outer[1], app);

    match app.main_view {
        MainView::Listing => app.listing_view.draw(
            f,
            outer[2],
            &app.pagination,
            app.loading,
            &app.wishlist,
            &app.theme,
        ),
        MainView::Wishlist => app.wishlist_view.draw(f, outer[2], &app.theme),
    }

    draw_commander(f, outer[3], app);

    if let Some(car) = &app.details {
        draw_details(f, area, car, app.wishlist.contains(car.id), &app.theme);
    }
}
