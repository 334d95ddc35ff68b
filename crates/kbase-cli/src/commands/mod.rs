pub mod ingest;
pub mod init;
pub mod job;
pub mod search;

/// Default database path when --db is not supplied
pub const DEFAULT_DB_PATH: &str = "kbase.db";

/// Truncate content for display, respecting char boundaries
pub(crate) fn preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let truncated: String = content.chars().take(max_chars).collect();
    format!("{}...", truncated)
}
