//! Schema bootstrap.
//!
//! The service owns four tables (`places`, `logs`, `tasks`, `events`). Startup
//! creates whatever is missing; existing tables and rows are left untouched.

use sqlx::{Executor, PgPool};
use tracing::info;

use crate::metrics::QueryTimer;

/// Idempotent DDL for every table and index the service reads or writes.
pub const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Creates missing tables and indexes.
pub async fn bootstrap(pool: &PgPool) -> Result<(), sqlx::Error> {
    let timer = QueryTimer::new("bootstrap_schema");
    let result = pool.execute(SCHEMA_SQL).await;
    timer.record();
    result?;

    info!("Database schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_is_idempotent_ddl() {
        let statements: Vec<&str> = SCHEMA_SQL
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        assert!(!statements.is_empty());
        for statement in statements {
            assert!(
                statement.starts_with("CREATE TABLE IF NOT EXISTS")
                    || statement.starts_with("CREATE INDEX IF NOT EXISTS"),
                "non-idempotent statement: {statement}"
            );
        }
    }

    #[test]
    fn test_schema_covers_all_tables() {
        for table in ["places", "logs", "tasks", "events"] {
            assert!(SCHEMA_SQL.contains(&format!("CREATE TABLE IF NOT EXISTS {table} (")));
        }
    }
}
