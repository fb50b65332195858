//! Task repository for database operations.

use sqlx::PgPool;

use domain::models::{NewTask, TaskPatch, TaskStatus};

use crate::entities::TaskEntity;
use crate::metrics::QueryTimer;

/// Repository for task database operations.
#[derive(Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    /// Creates a new TaskRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Tasks newest first, optionally restricted to one status.
    pub async fn list(&self, status: Option<TaskStatus>) -> Result<Vec<TaskEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_tasks");
        let result = sqlx::query_as::<_, TaskEntity>(
            r#"
            SELECT * FROM tasks
            WHERE ($1::text IS NULL OR status = $1)
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert a pending task.
    pub async fn create(&self, task: &NewTask) -> Result<TaskEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_task");
        let result = sqlx::query_as::<_, TaskEntity>(
            r#"
            INSERT INTO tasks (id, title, description, status, created_at, priority, due_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&task.id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(TaskStatus::Pending.as_str())
        .bind(task.created_at)
        .bind(&task.priority)
        .bind(task.due_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Apply a partial update. Fields absent from the patch keep their value;
    /// `Some(None)` clears a nullable column. Returns `None` when no task has
    /// this id.
    pub async fn update(&self, id: &str, patch: &TaskPatch) -> Result<Option<TaskEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_task");
        let result = sqlx::query_as::<_, TaskEntity>(
            r#"
            UPDATE tasks SET
                title = COALESCE($2, title),
                description = CASE WHEN $3 THEN $4::text ELSE description END,
                priority = COALESCE($5, priority),
                due_by = CASE WHEN $6 THEN $7::date ELSE due_by END,
                status = COALESCE($8, status),
                completed_at = CASE WHEN $9 THEN $10::timestamptz ELSE completed_at END
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&patch.title)
        .bind(patch.description.is_some())
        .bind(patch.description.clone().flatten())
        .bind(&patch.priority)
        .bind(patch.due_by.is_some())
        .bind(patch.due_by.flatten())
        .bind(patch.status.map(|s| s.as_str()))
        .bind(patch.completed_at.is_some())
        .bind(patch.completed_at.flatten())
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a task by id. Returns the number of rows removed.
    pub async fn delete(&self, id: &str) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_task");
        let result = sqlx::query(
            r#"
            DELETE FROM tasks WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await;
        timer.record();
        Ok(result?.rows_affected())
    }
}
