//! Domain models
//!
//! Records are append-only: once stored they are never updated or
//! deleted through this interface. SyncJob is an inert placeholder row
//! representing a future scheduled synchronization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default source metadata applied when ingest omits `--source`
pub const DEFAULT_SOURCE: &str = "manual";

/// Default category applied when ingest omits `--category`
pub const DEFAULT_CATEGORY: &str = "general";

/// Default importance applied when ingest omits `--importance`
pub const DEFAULT_IMPORTANCE: i64 = 1;

/// One stored knowledge item with content and metadata
///
/// `id` is assigned by the store on creation and is immutable.
/// `timestamp` is set at insert time and never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub content: String,
    pub source: String,
    pub category: String,
    pub importance: i64,
    pub timestamp: DateTime<Utc>,
}

/// A record pending insertion (no id or timestamp yet)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    pub content: String,
    pub source: String,
    pub category: String,
    pub importance: i64,
}

impl NewRecord {
    /// Create a new record with default metadata
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source: DEFAULT_SOURCE.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            importance: DEFAULT_IMPORTANCE,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_importance(mut self, importance: i64) -> Self {
        self.importance = importance;
        self
    }
}

/// Optional search criteria composed into one conjunctive retrieval
///
/// `query` is matched as a substring anywhere in `content` using the
/// store's native LIKE operator. Each optional filter narrows the
/// result set with a logical AND; absent filters are not applied.
/// An empty `query` matches every record (the empty substring is
/// contained in all content).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub query: String,
    pub source: Option<String>,
    pub category: Option<String>,
    pub min_importance: Option<i64>,
}

impl SearchFilter {
    /// Create a filter matching `query` as a content substring
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_min_importance(mut self, min_importance: i64) -> Self {
        self.min_importance = Some(min_importance);
        self
    }
}

/// Inert placeholder row for a future scheduled synchronization
///
/// Lifecycle is "inserted, never advanced": no executor ever updates
/// `last_run`, `next_run`, or `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncJob {
    pub id: i64,
    pub job_name: String,
    pub last_run: Option<DateTime<Utc>>,
    pub next_run: Option<DateTime<Utc>>,
    pub status: String,
}

/// Status assigned to a freshly created sync job
pub const SYNC_JOB_STATUS_PENDING: &str = "pending";
