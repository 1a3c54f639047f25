// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::storage::{FileStore, KeyValueStore, StorageError};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.smartbudget", "SmartBudget", "smartbudget"));

const SQLITE_FILE: &str = "smartbudget.sqlite";

/// Which durable backend holds the document. Picked once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Backend {
    /// One JSON file per key.
    File,
    /// A key/value table in a SQLite database.
    Sqlite,
}

pub fn data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().to_path_buf())
}

pub fn open_store(backend: Backend, dir: &Path) -> Result<Box<dyn KeyValueStore>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create data dir {}", dir.display()))?;
    info!(?backend, dir = %dir.display(), "opening store");
    let store: Box<dyn KeyValueStore> = match backend {
        Backend::File => Box::new(FileStore::new(dir)),
        Backend::Sqlite => {
            let path = dir.join(SQLITE_FILE);
            Box::new(
                SqliteStore::open(&path)
                    .with_context(|| format!("Open DB at {}", path.display()))?,
            )
        }
    };
    Ok(store)
}

/// Key/value table in SQLite, the async-storage analogue.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    label: String,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn, path.display().to_string())
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::with_connection(Connection::open_in_memory()?, ":memory:".into())
    }

    fn with_connection(conn: Connection, label: String) -> Result<Self, StorageError> {
        init_schema(&conn)?;
        Ok(Self { conn, label })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let v = self
            .conn
            .query_row("SELECT value FROM kv WHERE key=?1", params![key], |r| r.get(0))
            .optional()?;
        Ok(v)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO kv(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, value],
        )?;
        debug!(key, bytes = value.len(), "stored value in sqlite");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("sqlite store at {}", self.label)
    }
}

fn init_schema(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS kv(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
    "#,
    )?;
    Ok(())
}
