//! Embedded migration framework
//!
//! Migrations are compiled in via include_str!, checksummed, and
//! applied idempotently inside transactions.

pub mod checksums;
pub mod embedded;
pub mod runner;

pub use runner::apply_migrations;
