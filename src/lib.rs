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

//! # Car Finder core.
//!
//! The library half of the car listing browser. It holds everything that is
//! independent of the terminal front-end:
//!
//! * [`model`]: catalog records, filter criteria, sort specifications and
//!   query results.
//! * [`catalog`]: the read-only vehicle catalog and the filter choices
//!   derived from it.
//! * [`query`]: the search, filter, sort and paginate pipeline.
//! * [`storage`]: the key-value storage port, with SQLite and in-memory
//!   backends.
//! * [`wishlist`]: the persisted, ordered set of saved cars.
//! * [`preferences`]: the persisted light/dark theme preference.
//! * [`db`]: SQLite schema and catalog loading.
//! * [`config`]: the application configuration file.
//!
//! Everything here is synchronous and single-threaded. The catalog is passed
//! explicitly to every query, and persistence goes through a [`StoragePort`]
//! handed to the owning type at construction.
//!
//! [`StoragePort`]: storage::StoragePort

pub mod catalog;
pub mod config;
pub mod db;
pub mod model;
pub mod preferences;
pub mod query;
pub mod storage;
pub mod wishlist;
