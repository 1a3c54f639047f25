// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal_macros::dec;
use smartbudget::models::Currency;
use smartbudget::seed::seed;
use smartbudget::state::AppState;
use smartbudget::storage::{FileStore, MemoryStore, Persistence, STORAGE_KEY};
use tempfile::tempdir;

#[test]
fn new_state_is_loading_on_seed() {
    let state = AppState::new(Persistence::new(Box::new(MemoryStore::default())));
    assert!(state.is_loading());
    assert_eq!(state.data(), &seed());
}

#[test]
fn open_refreshes_from_storage() {
    let mut data = seed();
    data.currencies.clear();
    let raw = serde_json::to_string(&data.encode()).unwrap();
    let state = AppState::open(Persistence::new(Box::new(MemoryStore::with_entry(
        STORAGE_KEY,
        &raw,
    ))));
    assert!(!state.is_loading());
    assert!(state.data().currencies.is_empty());
}

#[test]
fn update_replaces_and_persists() {
    let dir = tempdir().unwrap();
    let mut state = AppState::open(Persistence::new(Box::new(FileStore::new(dir.path()))));
    state.modify(|d| {
        d.currencies
            .push(Currency::new("cur4", "JPY", "¥", "Yen"));
        d.accounts[0].current_balance = Some(dec!(42));
    });
    assert_eq!(state.data().currencies.len(), 4);

    let mut again = AppState::new(Persistence::new(Box::new(FileStore::new(dir.path()))));
    again.refresh();
    assert_eq!(again.data(), state.data());
    assert_eq!(again.data().accounts[0].current_balance, Some(dec!(42)));
}

#[test]
fn refresh_discards_unsaved_changes_from_storage_view() {
    let mut state = AppState::open(Persistence::new(Box::new(MemoryStore::default())));
    state.update(seed());
    let mut other = seed();
    other.accounts.pop();
    state.update(other.clone());
    state.refresh();
    assert_eq!(state.data(), &other);
}

#[test]
fn init_writes_only_when_nothing_is_stored() {
    let mut state = AppState::open(Persistence::new(Box::new(MemoryStore::default())));
    assert!(state.init().unwrap());
    assert_eq!(state.persistence().try_load().unwrap(), Some(seed()));

    state.modify(|d| { d.accounts.pop(); });
    assert!(!state.init().unwrap());
    assert_eq!(state.persistence().try_load().unwrap().unwrap().accounts.len(), 1);
}

#[test]
fn init_leaves_corrupt_document_in_place() {
    let mut state = AppState::open(Persistence::new(Box::new(MemoryStore::with_entry(
        STORAGE_KEY,
        "{not json",
    ))));
    assert_eq!(state.data(), &seed());
    assert!(state.init().is_err());
    assert_eq!(
        state.persistence().store().get(STORAGE_KEY).unwrap().as_deref(),
        Some("{not json")
    );
}
