//! Log entry repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use domain::models::log_entry::ARRIVE_EVENT;
use domain::models::{LogFilter, NewLogEntry};
use domain::services::UNKNOWN_PLACE;

use crate::entities::LogEntryEntity;
use crate::metrics::QueryTimer;

/// Repository for log entry database operations.
#[derive(Clone)]
pub struct LogRepository {
    pool: PgPool,
}

impl LogRepository {
    /// Creates a new LogRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a log entry and return it joined with its place name.
    pub async fn create(&self, entry: &NewLogEntry) -> Result<LogEntryEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_log_entry");
        let result = sqlx::query_as::<_, LogEntryEntity>(
            r#"
            WITH inserted AS (
                INSERT INTO logs (timestamp, event, lat, lon, place_id, notes, duration_minutes, mode)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING *
            )
            SELECT i.*, p.name AS place_name
            FROM inserted i
            LEFT JOIN places p ON p.id = i.place_id
            "#,
        )
        .bind(entry.timestamp)
        .bind(&entry.event)
        .bind(entry.lat)
        .bind(entry.lon)
        .bind(&entry.place_id)
        .bind(&entry.notes)
        .bind(entry.duration_minutes)
        .bind(entry.mode.as_str())
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Timestamp of the most recent arrival, if any.
    pub async fn find_latest_arrival(&self) -> Result<Option<DateTime<Utc>>, sqlx::Error> {
        let timer = QueryTimer::new("find_latest_arrival");
        let result = sqlx::query_scalar::<_, DateTime<Utc>>(
            r#"
            SELECT timestamp FROM logs
            WHERE event = $1
            ORDER BY timestamp DESC
            LIMIT 1
            "#,
        )
        .bind(ARRIVE_EVENT)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Entries matching the filter, newest first.
    ///
    /// The date filter compares against the calendar date in the session
    /// time zone. A place filter of `"unknown"` also matches entries with no
    /// place.
    pub async fn list(&self, filter: &LogFilter) -> Result<Vec<LogEntryEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_log_entries");
        let result = sqlx::query_as::<_, LogEntryEntity>(
            r#"
            SELECT l.*, p.name AS place_name
            FROM logs l
            LEFT JOIN places p ON l.place_id = p.id
            WHERE ($1::date IS NULL OR DATE(l.timestamp) = $1)
              AND ($2::text IS NULL OR l.event = $2)
              AND ($3::text IS NULL OR COALESCE(p.name, $4) = $3)
            ORDER BY l.timestamp DESC, l.id DESC
            LIMIT $5
            "#,
        )
        .bind(filter.date)
        .bind(&filter.event)
        .bind(&filter.place)
        .bind(UNKNOWN_PLACE)
        .bind(filter.limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete an entry by id. Returns the number of rows removed.
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_log_entry");
        let result = sqlx::query(
            r#"
            DELETE FROM logs WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await;
        timer.record();
        Ok(result?.rows_affected())
    }
}
