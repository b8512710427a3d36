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

//! Persisted user preferences.
//!
//! The only preference is the light/dark theme. It is read once when the
//! preference is opened and written back on every toggle.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::storage::{self, StoragePort};

/// The storage key the theme preference is persisted under.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub const fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme `{0}`")]
pub struct ParseThemeError(pub String);

impl FromStr for ThemeMode {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

pub struct ThemePreference<P> {
    mode: ThemeMode,
    port: P,
}

impl<P: StoragePort> ThemePreference<P> {
    /// Reads the stored theme, using `fallback` when nothing valid is stored.
    pub fn open(port: P, fallback: ThemeMode) -> storage::Result<Self> {
        let stored = port
            .load()?
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .and_then(|value| value.parse::<ThemeMode>().ok());

        let mode = stored.unwrap_or(fallback);
        debug!(%mode, from_storage = stored.is_some(), "theme preference loaded");

        Ok(Self { mode, port })
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Switches between light and dark, persisting the new mode.
    pub fn toggle(&mut self) -> storage::Result<ThemeMode> {
        self.mode = self.mode.toggled();
        self.port.save(self.mode.as_str().as_bytes())?;
        Ok(self.mode)
    }
}
