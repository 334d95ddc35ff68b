//! KnowledgeStore facade
//!
//! Owns one SQLite connection for the lifetime of a single CLI
//! invocation. Configuration is injected at construction; the store
//! reads nothing from ambient state.

use crate::errors::{io_error, Result};
use crate::{db, migrations, repo};
use kbase_core::config::StoreConfig;
use kbase_core::model::{NewRecord, Record, SearchFilter, SyncJob};
use rusqlite::Connection;
use std::path::Path;

/// Durable keeper of Records backed by a SQLite file
pub struct KnowledgeStore {
    conn: Connection,
    config: StoreConfig,
}

impl KnowledgeStore {
    /// Open the store at the configured path, creating parent directories
    pub fn open(config: StoreConfig) -> Result<Self> {
        if let Some(parent) = config.db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
            }
        }

        let conn = db::open(&config.db_path)?;
        db::configure(&conn)?;

        Ok(Self { conn, config })
    }

    /// Open an in-memory store (for testing)
    pub fn open_in_memory(config: StoreConfig) -> Result<Self> {
        let conn = db::open_in_memory()?;
        Ok(Self { conn, config })
    }

    /// Idempotently ensure the schema exists
    ///
    /// Safe to call on every invocation; re-running never erases
    /// existing records.
    pub fn initialize(&mut self) -> Result<()> {
        migrations::apply_migrations(&mut self.conn)
    }

    /// Append a new record, assigning id and timestamp
    ///
    /// Importance is validated against the configured policy before
    /// the insert; the store itself accepts any integer.
    pub fn append(&self, new: &NewRecord) -> Result<Record> {
        self.config.importance_policy.validate(new.importance)?;
        repo::records::insert_record(&self.conn, new)
    }

    /// Retrieve records matching the filter, in insertion order
    pub fn search(&self, filter: &SearchFilter) -> Result<Vec<Record>> {
        repo::records::search_records(&self.conn, filter)
    }

    /// Insert the placeholder sync job row
    pub fn create_sync_job(&self, job_name: &str) -> Result<SyncJob> {
        repo::sync_jobs::insert_sync_job(&self.conn, job_name)
    }

    /// Path of the underlying database file
    pub fn db_path(&self) -> &Path {
        &self.config.db_path
    }
}
