//! kbase core - domain model and shared facilities
//!
//! This crate provides the foundational pieces shared by the store,
//! sync, and CLI crates:
//! - Record and SyncJob domain models
//! - SearchFilter (the conjunctive search contract)
//! - Canonical error type with stable error codes
//! - Explicit configuration structs (no ambient globals)
//! - Logging initialization

pub mod config;
pub mod errors;
pub mod logging;
pub mod model;

// Re-export commonly used types
pub use config::{ImportancePolicy, RemoteConfig, StoreConfig};
pub use errors::{KbError, Result};
pub use model::{NewRecord, Record, SearchFilter, SyncJob};
