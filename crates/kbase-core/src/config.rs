//! Configuration structs
//!
//! All paths and endpoints are passed explicitly at construction time;
//! nothing is read from ambient global state.

use crate::errors::{KbError, Result};
use std::path::PathBuf;

/// Configuration for the local SQLite store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the SQLite database file
    pub db_path: PathBuf,
    /// Validation policy applied to importance values on append
    pub importance_policy: ImportancePolicy,
}

impl StoreConfig {
    /// Create a store configuration with the default (unbounded) importance policy
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            importance_policy: ImportancePolicy::default(),
        }
    }

    pub fn with_importance_policy(mut self, policy: ImportancePolicy) -> Self {
        self.importance_policy = policy;
        self
    }
}

/// Validation policy for record importance
///
/// The documented intent of importance is a 1-5 scale, but historically
/// values were never validated. The policy makes enforcement an explicit
/// configuration choice instead of a hardcoded guess: `Unbounded`
/// preserves the accept-anything behavior, `Range` enforces bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportancePolicy {
    /// Accept any importance value (historical behavior)
    #[default]
    Unbounded,
    /// Reject values outside `min..=max`
    Range { min: i64, max: i64 },
}

impl ImportancePolicy {
    /// The documented 1-5 importance scale
    pub fn documented_range() -> Self {
        ImportancePolicy::Range { min: 1, max: 5 }
    }

    /// Validate an importance value against this policy
    pub fn validate(&self, importance: i64) -> Result<()> {
        match self {
            ImportancePolicy::Unbounded => Ok(()),
            ImportancePolicy::Range { min, max } => {
                if importance < *min || importance > *max {
                    Err(KbError::invalid_input(format!(
                        "importance {} is outside the allowed range {}..={}",
                        importance, min, max
                    )))
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// Configuration for the external query engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    /// HTTP endpoint of the query engine
    pub endpoint: String,
    /// Name of the datasource registered with the engine
    pub database: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:47334".to_string(),
            database: "kb_source".to_string(),
        }
    }
}
