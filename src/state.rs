// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tracing::debug;

use crate::models::AppData;
use crate::seed::seed;
use crate::storage::{Persistence, StorageError};

/// The in-memory document for one session, owned by the entry point and
/// handed down to whatever renders it.
#[derive(Debug)]
pub struct AppState {
    data: AppData,
    loading: bool,
    persistence: Persistence,
}

impl AppState {
    /// Starts on the seed with `is_loading()` set until the first
    /// [`refresh`](Self::refresh).
    pub fn new(persistence: Persistence) -> Self {
        Self {
            data: seed(),
            loading: true,
            persistence,
        }
    }

    pub fn open(persistence: Persistence) -> Self {
        let mut state = Self::new(persistence);
        state.refresh();
        state
    }

    pub fn data(&self) -> &AppData {
        &self.data
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn persistence(&self) -> &Persistence {
        &self.persistence
    }

    pub fn refresh(&mut self) {
        self.loading = true;
        self.data = self.persistence.load();
        self.loading = false;
        debug!(
            accounts = self.data.accounts.len(),
            transactions = self.data.transactions.len(),
            "document loaded"
        );
    }

    /// Stores the current document when nothing is stored yet. Returns
    /// whether a write happened. An unreadable stored document is an error
    /// and is left in place.
    pub fn init(&mut self) -> Result<bool, StorageError> {
        if self.persistence.try_load()?.is_some() {
            return Ok(false);
        }
        self.persistence.try_save(&self.data)?;
        Ok(true)
    }

    /// Replaces the document and writes it out.
    pub fn update(&mut self, data: AppData) {
        self.data = data;
        self.persistence.save(&self.data);
    }

    /// Applies `f` to a copy of the current document, then [`update`](Self::update)s.
    pub fn modify<F>(&mut self, f: F)
    where
        F: FnOnce(&mut AppData),
    {
        let mut next = self.data.clone();
        f(&mut next);
        self.update(next);
    }
}
