//! Record repository
//!
//! Insert and search over the knowledge_base table. Records are
//! append-only; there is no update or delete path.

use crate::errors::{from_rusqlite, Result};
use chrono::{DateTime, Utc};
use kbase_core::model::{NewRecord, Record, SearchFilter};
use rusqlite::{Connection, ToSql};

const RECORD_COLUMNS: &str = "id, content, source, category, importance, timestamp";

/// Insert a new record, assigning id and timestamp
pub fn insert_record(conn: &Connection, new: &NewRecord) -> Result<Record> {
    let now = Utc::now();

    conn.execute(
        "INSERT INTO knowledge_base (content, source, category, importance, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![
            new.content,
            new.source,
            new.category,
            new.importance,
            now.to_rfc3339(),
        ],
    )
    .map_err(from_rusqlite)?;

    let id = conn.last_insert_rowid();

    tracing::debug!(id, source = %new.source, category = %new.category, "inserted record");

    Ok(Record {
        id,
        content: new.content.clone(),
        source: new.source.clone(),
        category: new.category.clone(),
        importance: new.importance,
        timestamp: now,
    })
}

/// Search records matching the filter, in insertion order
///
/// The filter's criteria are conjunctive: content must contain the
/// query substring, and each present optional predicate must also
/// hold. Zero matches is an empty vec, not an error.
pub fn search_records(conn: &Connection, filter: &SearchFilter) -> Result<Vec<Record>> {
    let (sql, params) = build_search_sql(filter);

    let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
    let params_ref: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();

    let records = stmt
        .query_map(params_ref.as_slice(), row_to_record)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(records)
}

/// Build the conjunctive search SQL and its positional parameters
///
/// Base predicate is a LIKE containment match on content; optional
/// predicates are appended with AND in a fixed order. The query text
/// is bound, never interpolated, so LIKE wildcards in it behave as
/// SQLite defines them.
fn build_search_sql(filter: &SearchFilter) -> (String, Vec<Box<dyn ToSql>>) {
    let mut sql = format!(
        "SELECT {} FROM knowledge_base WHERE content LIKE ?1",
        RECORD_COLUMNS
    );
    let mut params: Vec<Box<dyn ToSql>> = vec![Box::new(format!("%{}%", filter.query))];

    if let Some(source) = &filter.source {
        params.push(Box::new(source.clone()));
        sql.push_str(&format!(" AND source = ?{}", params.len()));
    }
    if let Some(category) = &filter.category {
        params.push(Box::new(category.clone()));
        sql.push_str(&format!(" AND category = ?{}", params.len()));
    }
    if let Some(min_importance) = filter.min_importance {
        params.push(Box::new(min_importance));
        sql.push_str(&format!(" AND importance >= ?{}", params.len()));
    }

    sql.push_str(" ORDER BY id ASC");

    (sql, params)
}

fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<Record> {
    let timestamp_str: String = row.get(5)?;
    let timestamp = DateTime::parse_from_rfc3339(&timestamp_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                5,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })?;

    Ok(Record {
        id: row.get(0)?,
        content: row.get(1)?,
        source: row.get(2)?,
        category: row.get(3)?,
        importance: row.get(4)?,
        timestamp,
    })
}
