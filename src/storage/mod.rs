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

//! Local key-value persistence.
//!
//! Persisted state is kept as opaque bytes in named slots of a
//! [`KeyValueStore`]. Types that persist themselves do not see the store
//! directly; they are handed a [`StoragePort`], usually a [`Slot`] binding one
//! key of a shared store.
//!
//! # Backends
//!
//! * [`SqliteStore`] - A `kv` table in the application database.
//! * [`MemoryStore`] - A `HashMap`, for tests and throwaway sessions.

mod memory;
mod sqlite;

use std::rc::Rc;

use thiserror::Error;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// A store of byte values addressed by string keys.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn put(&self, key: &str, value: &[u8]) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).put(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).put(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// A single persisted value.
///
/// `load` returns `None` when nothing has been saved yet.
pub trait StoragePort {
    fn load(&self) -> Result<Option<Vec<u8>>>;
    fn save(&mut self, bytes: &[u8]) -> Result<()>;
}

/// One named key of a [`KeyValueStore`], used as a [`StoragePort`].
#[derive(Debug, Clone)]
pub struct Slot<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> Slot<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

impl<S: KeyValueStore> StoragePort for Slot<S> {
    fn load(&self) -> Result<Option<Vec<u8>>> {
        self.store.get(&self.key)
    }

    fn save(&mut self, bytes: &[u8]) -> Result<()> {
        self.store.put(&self.key, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_share_a_store() {
        let store = Rc::new(MemoryStore::new());
        let mut first = Slot::new(Rc::clone(&store), "first");
        let second = Slot::new(Rc::clone(&store), "second");

        first.save(b"one").unwrap();

        assert_eq!(first.load().unwrap(), Some(b"one".to_vec()));
        assert_eq!(second.load().unwrap(), None);
        assert_eq!(store.get("first").unwrap(), Some(b"one".to_vec()));
    }

    #[test]
    fn slot_over_borrowed_store() {
        let store = MemoryStore::new();
        let mut slot = Slot::new(&store, "theme");
        slot.save(b"dark").unwrap();
        assert_eq!(store.get("theme").unwrap(), Some(b"dark".to_vec()));
    }
}
