//! Integration tests for the favorites store persistence contract.

use eventmark::favorites::FavoriteStore;
use std::fs;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> FavoriteStore {
    FavoriteStore::new(dir.path().join("favorites.json"))
}

#[test]
fn test_toggle_twice_restores_persisted_bytes() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.toggle("ev-1");
    store.toggle("ev-3");

    let before = fs::read_to_string(store.path()).unwrap();

    store.toggle("ev-2");
    store.toggle("ev-2");

    let after = fs::read_to_string(store.path()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_toggle_negation_invariant_over_many_ids() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.toggle("seed-a");
    store.toggle("seed-b");

    for uid in ["seed-a", "seed-b", "fresh-1", "fresh-2"] {
        let before = store.contains(uid);
        store.toggle(uid);
        assert_eq!(store.contains(uid), !before, "uid {uid}");
    }
}

#[test]
fn test_serialized_form_is_a_json_list() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.toggle("b");
    store.toggle("a");

    let raw = fs::read_to_string(store.path()).unwrap();
    let list: Vec<String> = serde_json::from_str(&raw).unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.contains(&"a".to_string()));
    assert!(list.contains(&"b".to_string()));
}

#[test]
fn test_storage_failure_degrades_without_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    // Unwritable location: every persist fails, every read is empty.
    let store = FavoriteStore::new(blocker.join("favorites.json"));

    assert!(store.all().is_empty());
    assert!(store.toggle("ev-1"));
    assert!(store.all().is_empty());
}
