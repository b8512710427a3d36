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

//! Data access layer.
//!
//! This module handles all interactions with the SQLite database: schema
//! creation, seeding the catalog and loading it back.
//!
//! # Tables
//!
//! * `cars` - The vehicle catalog, one row per listing.
//! * `kv` - Key-value slots for persisted state, owned by
//!   [`SqliteStore`](crate::storage::SqliteStore).

mod model;

use rusqlite::{Connection, params};
use tracing::info;

use crate::{catalog::Catalog, model::Car, storage::Result};

/// Opens a connection to the SQLite database and configures it.
///
/// This function performs the following setup:
/// * **WAL Mode**: Enables Write-Ahead Logging.
/// * **Schema**: Executes [`create_schema`] to ensure the catalog table exists.
///
/// # Arguments
///
/// * `path` - The file system path to the SQLite database file.
///
/// # Errors
///
/// Returns an error if the database file cannot be opened or the schema
/// cannot be created.
pub fn init_db(path: &str) -> Result<Connection> {
    let conn = Connection::open(path)?;

    // In-memory databases report "memory" and stay that way.
    let _journal_mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |r| r.get(0))?;

    conn.execute_batch("PRAGMA synchronous = NORMAL;")?;
    conn.set_prepared_statement_cache_capacity(100);

    create_schema(&conn)?;

    Ok(conn)
}

/// Create the database schema.
///
/// Runs in a single transaction so the schema is created atomically.
pub fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "BEGIN;

        CREATE TABLE IF NOT EXISTS cars (
            id INTEGER PRIMARY KEY,
            brand TEXT NOT NULL,
            model TEXT NOT NULL,
            year INTEGER NOT NULL CHECK (year >= 0),
            price INTEGER NOT NULL CHECK (price >= 0),
            fuel_type TEXT NOT NULL,
            seating_capacity INTEGER NOT NULL CHECK (seating_capacity >= 0),
            transmission TEXT NOT NULL,
            image TEXT NOT NULL,
            description TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_cars_brand ON cars (brand);

        COMMIT;",
    )?;

    Ok(())
}

/// Inserts the given cars when the catalog table is empty.
///
/// Returns the number of cars inserted, which is zero if the table already
/// held data.
pub fn seed_catalog(conn: &mut Connection, cars: &[Car]) -> Result<usize> {
    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM cars", [], |r| r.get(0))?;
    if existing > 0 {
        return Ok(0);
    }

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO cars (id, brand, model, year, price, fuel_type, seating_capacity, transmission, image, description)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        )?;

        for car in cars {
            stmt.execute(params![
                car.id,
                car.brand,
                car.model,
                car.year,
                car.price,
                car.fuel_type,
                car.seating_capacity,
                car.transmission,
                car.image,
                car.description,
            ])?;
        }
    }
    tx.commit()?;

    info!(count = cars.len(), "Seeded catalog");

    Ok(cars.len())
}

/// Fetches every car, in id order.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be mapped to a
/// [`Car`].
pub fn fetch_cars(conn: &Connection) -> Result<Vec<Car>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, brand, model, year, price, fuel_type, seating_capacity, transmission, image, description
         FROM cars
         ORDER BY id",
    )?;

    let results = stmt
        .query_map([], Car::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(results)
}

/// Loads the catalog from the database, seeding it with the sample cars on
/// first use.
pub fn load_catalog(conn: &mut Connection) -> Result<Catalog> {
    seed_catalog(conn, Catalog::sample().records())?;
    let cars = fetch_cars(conn)?;

    info!(count = cars.len(), "Loaded catalog");

    Ok(Catalog::new(cars))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn seeds_once() {
        let mut conn = memory_db();
        let sample = Catalog::sample();

        assert_eq!(seed_catalog(&mut conn, sample.records()).unwrap(), 20);
        assert_eq!(seed_catalog(&mut conn, sample.records()).unwrap(), 0);
    }

    #[test]
    fn loads_what_was_seeded() {
        let mut conn = memory_db();
        let catalog = load_catalog(&mut conn).unwrap();

        assert_eq!(catalog.records(), Catalog::sample().records());
    }

    #[test]
    fn init_db_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cars.db");

        let mut conn = init_db(path.to_str().unwrap()).unwrap();
        assert_eq!(load_catalog(&mut conn).unwrap().len(), 20);

        drop(conn);
        let conn = init_db(path.to_str().unwrap()).unwrap();
        assert_eq!(fetch_cars(&conn).unwrap().len(), 20);
    }
}
