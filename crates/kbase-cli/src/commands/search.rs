//! Search command
//!
//! Usage: kbase search <QUERY> [--source S] [--category C] [--min-importance N]

use clap::Args;
use kbase_core::config::StoreConfig;
use kbase_core::model::SearchFilter;
use kbase_store::KnowledgeStore;

use super::{preview, DEFAULT_DB_PATH};

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Search term, matched as a content substring
    pub query: String,

    /// Filter by source metadata (exact match)
    #[arg(long)]
    pub source: Option<String>,

    /// Filter by category (exact match)
    #[arg(long)]
    pub category: Option<String>,

    /// Minimum importance level (inclusive)
    #[arg(long)]
    pub min_importance: Option<i64>,

    /// Path to the SQLite database file
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    pub db: String,
}

/// Execute search: print matching records in insertion order
///
/// Zero matches is a normal outcome, reported on stdout with exit 0.
pub fn execute(args: SearchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = KnowledgeStore::open(StoreConfig::new(&args.db))?;
    store.initialize()?;

    let filter = SearchFilter {
        query: args.query.clone(),
        source: args.source,
        category: args.category,
        min_importance: args.min_importance,
    };
    let records = store.search(&filter)?;

    if records.is_empty() {
        println!("No results found for '{}'", args.query);
        return Ok(());
    }

    println!("Found {} results for '{}':", records.len(), args.query);
    for record in &records {
        println!(
            "- {} (Source: {}, Category: {}, Importance: {})",
            preview(&record.content, 50),
            record.source,
            record.category,
            record.importance
        );
    }

    Ok(())
}
