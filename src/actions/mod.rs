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

//! Application logic, event handling, and command dispatching.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. It organizes how various inputs are translated into internal
//! state changes.
//!
//! # Organization
//!
//! * [`events`]: Defines the application events (keyboard, query results,
//!   ticks) and the main event loop.
//! * [`commands`]: Work sent to the background query worker.
//! * [`handlers`]: Applies an [`Action`] to the application state.
//!
//! Keyboard shortcuts and commander commands both resolve to an [`Action`],
//! so every user intent goes through the same handler.

pub(crate) mod commands;
pub(crate) mod events;
pub(crate) mod handlers;

use carfinder::model::{Car, SortSpec};

use crate::MainView;

/// A user intent, independent of how it was entered.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
    Search(String),

    SetBrand(Option<String>),
    CycleBrand,
    SetFuelType(Option<String>),
    CycleFuelType,
    SetSeats(Option<u32>),
    CycleSeats,
    SetMinPrice(Option<u32>),
    AdjustMinPrice(i64),
    SetMaxPrice(Option<u32>),
    AdjustMaxPrice(i64),
    ResetFilters,

    SetSort(SortSpec),
    CycleSort,

    GotoPage(usize),
    NextPage,
    PreviousPage,

    ShowView(MainView),
    ToggleWishlistView,

    ToggleSaved(Car),
    ShowDetails(Car),
    CloseDetails,

    ToggleTheme,
    Quit,
}
