//! Sync job repository
//!
//! Inserts the placeholder sync job row. No executor ever advances a
//! job; the row exists only as the marker for a future scheduler.

use crate::errors::{from_rusqlite, Result};
use chrono::Utc;
use kbase_core::model::{SyncJob, SYNC_JOB_STATUS_PENDING};
use rusqlite::Connection;

/// Insert a placeholder sync job with status 'pending'
pub fn insert_sync_job(conn: &Connection, job_name: &str) -> Result<SyncJob> {
    let now = Utc::now();
    let now_str = now.to_rfc3339();

    conn.execute(
        "INSERT INTO sync_jobs (job_name, last_run, next_run, status)
         VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![job_name, now_str, now_str, SYNC_JOB_STATUS_PENDING],
    )
    .map_err(from_rusqlite)?;

    let id = conn.last_insert_rowid();

    tracing::debug!(id, job_name, "inserted sync job");

    Ok(SyncJob {
        id,
        job_name: job_name.to_string(),
        last_run: Some(now),
        next_run: Some(now),
        status: SYNC_JOB_STATUS_PENDING.to_string(),
    })
}
