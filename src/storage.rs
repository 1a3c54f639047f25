// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Key-value backends and the gateway that keeps the budget document in one
//! of them.
//!
//! The gateway never hands an error back to its caller: a document that
//! cannot be read falls back to the seed and a failed write is only logged.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, error};

use crate::models::{AppData, DecodeError};
use crate::seed::seed;

/// Key under which the whole document is stored.
pub const STORAGE_KEY: &str = "smartbudget_data";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unreadable document: {0}")]
    Decode(#[from] DecodeError),
}

/// The get/set capability a storage backend has to provide.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Human readable location, for messages.
    fn describe(&self) -> String;
}

/// One file per key inside a directory, the local-storage analogue.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        debug!(path = %path.display(), bytes = value.len(), "wrote document file");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("file store at {}", self.dir.display())
    }
}

/// Volatile store, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory store".into()
    }
}

pub struct Persistence {
    store: Box<dyn KeyValueStore>,
}

impl Persistence {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// The stored document, or the seed when there is none or it cannot be
    /// read.
    pub fn load(&self) -> AppData {
        match self.try_load() {
            Ok(Some(data)) => data,
            Ok(None) => {
                debug!(key = STORAGE_KEY, "no stored document, using seed");
                seed()
            }
            Err(e) => {
                error!(key = STORAGE_KEY, "Error loading data: {e}");
                seed()
            }
        }
    }

    pub fn try_load(&self) -> Result<Option<AppData>, StorageError> {
        let Some(raw) = self.store.get(STORAGE_KEY)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        let doc: serde_json::Value = serde_json::from_str(&raw)?;
        Ok(Some(AppData::decode(&doc)?))
    }

    /// Writes the document. Failures are logged and otherwise ignored.
    pub fn save(&mut self, data: &AppData) {
        if let Err(e) = self.try_save(data) {
            error!(key = STORAGE_KEY, "Error saving data: {e}");
        }
    }

    pub fn try_save(&mut self, data: &AppData) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&data.encode())?;
        self.store.set(STORAGE_KEY, &raw)
    }
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence")
            .field("store", &self.store.describe())
            .finish()
    }
}
