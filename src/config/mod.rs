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

//! Application configuration.
//!
//! This module manages the application configuration file. A missing or
//! unreadable file is not an error, the defaults are used instead.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    model::{ParseSortError, SortSpec},
    preferences::ThemeMode,
    query::DEFAULT_PAGE_SIZE,
};

const CONFIG_NAME: &str = "carfinder";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub database_file: String,
    pub log_file: String,
    pub page_size: usize,
    pub loading_delay_ms: u64,
    pub default_sort: String,
    pub theme: ThemeMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            database_file: "carfinder.db".to_string(),
            log_file: "carfinder.log".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            loading_delay_ms: 300,
            default_sort: SortSpec::default().to_string(),
            theme: ThemeMode::default(),
        }
    }
}

impl AppConfig {
    /// The configured page size, never zero.
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }

    pub fn default_sort(&self) -> Result<SortSpec, ParseSortError> {
        self.default_sort.parse()
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load configuration, using defaults");
        AppConfig::default()
    })
}

pub fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}
