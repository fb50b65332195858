//! Journal event repository for database operations.

use sqlx::PgPool;

use domain::models::{JournalEventPatch, NewJournalEvent};

use crate::entities::JournalEventEntity;
use crate::metrics::QueryTimer;

/// Repository for journal events (the `events` table).
#[derive(Clone)]
pub struct JournalEventRepository {
    pool: PgPool,
}

impl JournalEventRepository {
    /// Creates a new JournalEventRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Events with the latest date first.
    pub async fn list(&self) -> Result<Vec<JournalEventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_journal_events");
        let result = sqlx::query_as::<_, JournalEventEntity>(
            r#"
            SELECT * FROM events ORDER BY date DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn create(&self, event: &NewJournalEvent) -> Result<JournalEventEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_journal_event");
        let result = sqlx::query_as::<_, JournalEventEntity>(
            r#"
            INSERT INTO events (id, title, description, date)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.date)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Apply a partial update. Returns `None` when no event has this id.
    pub async fn update(
        &self,
        id: &str,
        patch: &JournalEventPatch,
    ) -> Result<Option<JournalEventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_journal_event");
        let result = sqlx::query_as::<_, JournalEventEntity>(
            r#"
            UPDATE events SET
                title = COALESCE($2, title),
                description = CASE WHEN $3 THEN $4::text ELSE description END,
                date = COALESCE($5, date)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&patch.title)
        .bind(patch.description.is_some())
        .bind(patch.description.clone().flatten())
        .bind(patch.date)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: &str) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_journal_event");
        let result = sqlx::query(
            r#"
            DELETE FROM events WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await;
        timer.record();
        Ok(result?.rows_affected())
    }
}
