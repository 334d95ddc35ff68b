//! kbase CLI
//!
//! Command-line interface for the local knowledge base

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "kbase")]
#[command(about = "Local knowledge base with substring search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the knowledge base schema and register the remote datasource
    Init(commands::init::InitArgs),
    /// Add a record to the knowledge base
    Ingest(commands::ingest::IngestArgs),
    /// Search records by content substring with optional filters
    Search(commands::search::SearchArgs),
    /// Create the placeholder periodic sync job
    CreateJob(commands::job::CreateJobArgs),
}

fn main() {
    kbase_core::logging::init(kbase_core::logging::Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init(args) => commands::init::execute(args),
        Commands::Ingest(args) => commands::ingest::execute(args),
        Commands::Search(args) => commands::search::execute(args),
        Commands::CreateJob(args) => commands::job::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
