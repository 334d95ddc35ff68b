//! Ingest command
//!
//! Usage: kbase ingest <CONTENT> [--source S] [--category C] [--importance N]

use clap::Args;
use kbase_core::config::{ImportancePolicy, StoreConfig};
use kbase_core::model::NewRecord;
use kbase_store::KnowledgeStore;

use super::{preview, DEFAULT_DB_PATH};

#[derive(Debug, Args)]
pub struct IngestArgs {
    /// Text content to ingest
    pub content: String,

    /// Data source metadata
    #[arg(long, default_value = "manual")]
    pub source: String,

    /// Content category
    #[arg(long, default_value = "general")]
    pub category: String,

    /// Importance level (documented scale: 1-5)
    #[arg(long, default_value_t = 1)]
    pub importance: i64,

    /// Enforce the documented 1-5 importance range
    #[arg(long)]
    pub strict_importance: bool,

    /// Path to the SQLite database file
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    pub db: String,
}

/// Execute ingest: append one record
pub fn execute(args: IngestArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.content.trim().is_empty() {
        return Err("content cannot be empty".into());
    }

    let policy = if args.strict_importance {
        ImportancePolicy::documented_range()
    } else {
        ImportancePolicy::Unbounded
    };
    let config = StoreConfig::new(&args.db).with_importance_policy(policy);

    let mut store = KnowledgeStore::open(config)?;
    store.initialize()?;

    let new = NewRecord::new(args.content)
        .with_source(args.source)
        .with_category(args.category)
        .with_importance(args.importance);
    let record = store.append(&new)?;

    println!(
        "Ingested record {}: '{}' ({}, {})",
        record.id,
        preview(&record.content, 50),
        record.source,
        record.category
    );

    Ok(())
}
