//! kbase store - SQLite persistence
//!
//! Durable append-only keeping of Records plus the placeholder
//! sync_jobs table. Provides:
//! - Connection management (`db`)
//! - Embedded, checksummed, idempotent migrations (`migrations`)
//! - Record and sync-job repositories (`repo`)
//! - `KnowledgeStore`, the configured facade used by the CLI

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod store;

pub use store::KnowledgeStore;
