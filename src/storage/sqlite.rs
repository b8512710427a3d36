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

//! SQLite storage backend.
//!
//! Values live in the `kv` table of the application database, one row per
//! key. Writes are upserts, so saving a slot always replaces its previous
//! value in full.

use rusqlite::{Connection, OptionalExtension, params};

use crate::storage::{KeyValueStore, Result};

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Wraps an open connection, creating the `kv` table if it is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be created.
    pub fn new(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY NOT NULL,
                value BLOB NOT NULL
            );",
        )?;

        Ok(Self { conn })
    }

    /// Opens a store backed by a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::new(Connection::open_in_memory()?)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut stmt = self.conn.prepare_cached("SELECT value FROM kv WHERE key = ?1")?;
        let value = stmt
            .query_row(params![key], |row| row.get::<_, Vec<u8>>(0))
            .optional()?;

        Ok(value)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        let sql = "
            INSERT INTO kv (key, value)
            VALUES (?1, ?2)
            ON CONFLICT (key)
            DO UPDATE SET value = ?2";

        let mut stmt = self.conn.prepare_cached(sql)?;
        stmt.execute(params![key, value])?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut stmt = self.conn.prepare_cached("DELETE FROM kv WHERE key = ?1")?;
        stmt.execute(params![key])?;

        Ok(())
    }
}
