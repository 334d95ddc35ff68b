//! Embedded SQL migrations
//!
//! Migrations are embedded at compile time using include_str!

/// Migration metadata
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// Get all embedded migrations in order
pub fn get_migrations() -> Vec<Migration> {
    vec![
        Migration {
            id: "001_knowledge_base",
            sql: include_str!("../../migrations/001_knowledge_base.sql"),
        },
        Migration {
            id: "002_sync_jobs",
            sql: include_str!("../../migrations/002_sync_jobs.sql"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_ordered_by_id() {
        let migrations = get_migrations();
        let ids: Vec<&str> = migrations.iter().map(|m| m.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
