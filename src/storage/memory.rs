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

//! In-memory storage backend.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use crate::storage::{KeyValueStore, Result, StorageError};

/// A [`KeyValueStore`] that lives only as long as the process.
///
/// A store can be switched into a failing mode, in which every operation
/// returns [`StorageError::Unavailable`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, Vec<u8>>>,
    failing: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    fn check(&self) -> Result<()> {
        if self.failing.get() {
            return Err(StorageError::Unavailable("memory store is failing".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.check()?;
        Ok(self.values.borrow().get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        self.check()?;
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check()?;
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}
