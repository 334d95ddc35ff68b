//! Init command
//!
//! Usage: kbase init [--db PATH] [--remote-url URL] [--skip-remote]

use clap::Args;
use kbase_core::config::{RemoteConfig, StoreConfig};
use kbase_store::KnowledgeStore;
use kbase_sync::SyncClient;

use super::DEFAULT_DB_PATH;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Path to the SQLite database file
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    pub db: String,

    /// Endpoint of the remote query engine
    #[arg(long, default_value = "http://127.0.0.1:47334")]
    pub remote_url: String,

    /// Datasource name to register with the remote engine
    #[arg(long, default_value = "kb_source")]
    pub remote_database: String,

    /// Skip remote datasource registration
    #[arg(long)]
    pub skip_remote: bool,
}

/// Execute init: create the local schema, then register the datasource
///
/// Remote failure is logged and does not fail the command; the local
/// schema is already in place at that point.
pub fn execute(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = KnowledgeStore::open(StoreConfig::new(&args.db))?;
    store.initialize()?;
    println!("Knowledge base schema ready at {}", args.db);

    if args.skip_remote {
        return Ok(());
    }

    let remote = RemoteConfig {
        endpoint: args.remote_url,
        database: args.remote_database,
    };
    let client = SyncClient::new(remote)?;
    match client.register_datasource(store.db_path()) {
        Ok(_) => println!("Registered datasource with remote query engine"),
        Err(e) => {
            tracing::warn!(error = %e, "remote datasource registration failed");
            eprintln!("Warning: remote registration failed: {}", e);
        }
    }

    Ok(())
}
