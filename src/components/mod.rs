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

//! Reusable UI components and the views built from them.
//!
//! Each component keeps its own state and exposes a `process_event` method
//! that consumes the keys it understands and reports anything the
//! application must act on. Rendering lives in each component's `render`
//! sub-module.

mod car_table;
mod details;
mod listing;
mod search_box;
mod wishlist;

pub(crate) use car_table::{CarTable, CarTableAction};
pub(crate) use details::draw_details;
pub(crate) use listing::ListingView;
pub(crate) use search_box::{SearchBox, SearchBoxAction};
pub(crate) use wishlist::WishlistView;
