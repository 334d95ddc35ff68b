//! Create-job command
//!
//! Usage: kbase create-job [--name NAME]

use clap::Args;
use kbase_core::config::StoreConfig;
use kbase_store::KnowledgeStore;

use super::DEFAULT_DB_PATH;

#[derive(Debug, Args)]
pub struct CreateJobArgs {
    /// Name of the sync job
    #[arg(long, default_value = "Periodic Sync")]
    pub name: String,

    /// Path to the SQLite database file
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    pub db: String,
}

/// Execute create-job: insert the placeholder sync job row
pub fn execute(args: CreateJobArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = KnowledgeStore::open(StoreConfig::new(&args.db))?;
    store.initialize()?;

    let job = store.create_sync_job(&args.name)?;

    println!("Created sync job '{}' (status: {})", job.job_name, job.status);

    Ok(())
}
