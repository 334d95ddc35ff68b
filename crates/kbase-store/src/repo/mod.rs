pub mod records;
pub mod sync_jobs;
