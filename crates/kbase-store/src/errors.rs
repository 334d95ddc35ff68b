//! Error handling for kbase-store
//!
//! Wraps kbase-core KbError with store-specific helpers

use kbase_core::errors::KbError;

pub use kbase_core::errors::Result;

/// Create a storage error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> KbError {
    KbError::storage(err.to_string())
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> KbError {
    KbError::storage(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create an I/O error with operation context
pub fn io_error(operation: &str, err: std::io::Error) -> KbError {
    KbError::io(operation, err)
}
