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

use std::rc::Rc;

use proptest::prelude::*;
use tempfile::TempDir;

use carfinder::{
    catalog::Catalog,
    db,
    preferences::{THEME_KEY, ThemeMode, ThemePreference},
    storage::{KeyValueStore, MemoryStore, Slot, SqliteStore},
    wishlist::{WISHLIST_KEY, Wishlist},
};

fn open_store(dir: &TempDir) -> Rc<SqliteStore> {
    let path = dir.path().join("carfinder.db");
    let conn = db::init_db(path.to_str().unwrap()).unwrap();
    Rc::new(SqliteStore::new(conn).unwrap())
}

#[test]
fn wishlist_survives_reopening_the_database() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::sample();

    {
        let store = open_store(&dir);
        let mut wishlist = Wishlist::open(Slot::new(store, WISHLIST_KEY)).unwrap();
        wishlist.add(catalog.get(3).unwrap().clone()).unwrap();
        wishlist.add(catalog.get(1).unwrap().clone()).unwrap();
    }

    let store = open_store(&dir);
    let wishlist = Wishlist::open(Slot::new(store, WISHLIST_KEY)).unwrap();
    let ids: Vec<u32> = wishlist.list().iter().map(|car| car.id).collect();

    assert_eq!(ids, [3, 1]);
}

#[test]
fn corrupt_wishlist_is_reset_on_disk() {
    let dir = TempDir::new().unwrap();

    {
        let store = open_store(&dir);
        store.put(WISHLIST_KEY, b"{not json").unwrap();
    }

    let store = open_store(&dir);
    let wishlist = Wishlist::open(Slot::new(Rc::clone(&store), WISHLIST_KEY)).unwrap();

    assert!(wishlist.is_empty());
    assert_eq!(store.get(WISHLIST_KEY).unwrap().as_deref(), Some(&b"[]"[..]));
}

#[test]
fn wishlist_and_theme_share_a_store_under_separate_keys() {
    let store = Rc::new(MemoryStore::new());
    let catalog = Catalog::sample();

    let mut wishlist = Wishlist::open(Slot::new(Rc::clone(&store), WISHLIST_KEY)).unwrap();
    let mut theme = ThemePreference::open(Slot::new(Rc::clone(&store), THEME_KEY), ThemeMode::Light).unwrap();

    wishlist.add(catalog.get(2).unwrap().clone()).unwrap();
    assert_eq!(theme.toggle().unwrap(), ThemeMode::Dark);

    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some(&b"dark"[..]));

    let reopened = ThemePreference::open(Slot::new(Rc::clone(&store), THEME_KEY), ThemeMode::Light).unwrap();
    assert_eq!(reopened.mode(), ThemeMode::Dark);
    assert_eq!(Wishlist::open(Slot::new(store, WISHLIST_KEY)).unwrap().len(), 1);
}

proptest! {
    #[test]
    fn add_is_idempotent_and_remove_undoes_it(ids in prop::collection::vec(1u32..=20, 0..30)) {
        let catalog = Catalog::sample();
        let store = MemoryStore::new();
        let mut wishlist = Wishlist::open(Slot::new(&store, WISHLIST_KEY)).unwrap();

        for id in &ids {
            let car = catalog.get(*id).unwrap().clone();
            wishlist.add(car.clone()).unwrap();
            wishlist.add(car).unwrap();
        }

        let mut saved: Vec<u32> = wishlist.list().iter().map(|car| car.id).collect();
        let unique = saved.len();
        saved.sort_unstable();
        saved.dedup();
        prop_assert_eq!(saved.len(), unique);

        for id in &ids {
            wishlist.remove(*id).unwrap();
        }
        prop_assert!(wishlist.is_empty());

        let reopened = Wishlist::open(Slot::new(&store, WISHLIST_KEY)).unwrap();
        prop_assert!(reopened.is_empty());
    }

    #[test]
    fn add_then_remove_restores_a_saved_list(
        initial in prop::sample::subsequence((1u32..=20).collect::<Vec<_>>(), 1..20).prop_shuffle(),
        extra in 1u32..=20,
    ) {
        prop_assume!(!initial.contains(&extra));

        let catalog = Catalog::sample();
        let store = MemoryStore::new();
        let mut wishlist = Wishlist::open(Slot::new(&store, WISHLIST_KEY)).unwrap();
        for id in &initial {
            wishlist.add(catalog.get(*id).unwrap().clone()).unwrap();
        }

        let before_list = wishlist.list().to_vec();
        let before_bytes = store.get(WISHLIST_KEY).unwrap();

        prop_assert!(wishlist.add(catalog.get(extra).unwrap().clone()).unwrap());
        prop_assert!(wishlist.remove(extra).unwrap());

        prop_assert_eq!(wishlist.list(), before_list.as_slice());
        prop_assert_eq!(store.get(WISHLIST_KEY).unwrap(), before_bytes);
    }
}
