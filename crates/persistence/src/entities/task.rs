//! Task entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use domain::models::{Task, TaskStatus};
use shared::time::to_ist;
use tracing::warn;

/// Database row mapping for the tasks table.
#[derive(Debug, Clone, FromRow)]
pub struct TaskEntity {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub priority: String,
    pub due_by: Option<NaiveDate>,
}

impl From<TaskEntity> for Task {
    fn from(entity: TaskEntity) -> Self {
        let status = parse_status(&entity.id, &entity.status);
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            status,
            created_at: to_ist(entity.created_at),
            completed_at: entity.completed_at.map(to_ist),
            priority: entity.priority,
            due_by: entity.due_by,
        }
    }
}

/// Rows written outside the service may carry other labels; those read as
/// pending and are reported.
fn parse_status(task_id: &str, raw: &str) -> TaskStatus {
    TaskStatus::parse(raw).unwrap_or_else(|| {
        warn!(task_id = %task_id, status = %raw, "Unrecognized task status; reported as pending");
        TaskStatus::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entity(status: &str) -> TaskEntity {
        TaskEntity {
            id: "task_1700000000_0a1b2c3d".to_string(),
            title: "File report".to_string(),
            description: None,
            status: status.to_string(),
            created_at: Utc::now(),
            completed_at: None,
            priority: "high".to_string(),
            due_by: NaiveDate::from_ymd_opt(2024, 3, 8),
        }
    }

    #[test]
    fn test_task_entity_to_domain() {
        let task: Task = create_test_entity("in_progress").into();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, "high");
        assert_eq!(task.due_by, NaiveDate::from_ymd_opt(2024, 3, 8));
        assert_eq!(task.created_at.offset().local_minus_utc(), 19_800);
    }

    #[test]
    fn test_parse_status_known_labels() {
        assert_eq!(parse_status("t", "pending"), TaskStatus::Pending);
        assert_eq!(parse_status("t", "in_progress"), TaskStatus::InProgress);
        assert_eq!(parse_status("t", "completed"), TaskStatus::Completed);
        assert_eq!(parse_status("t", "Completed"), TaskStatus::Pending);
    }

    #[test]
    fn test_unrecognized_status_falls_back_to_pending() {
        let task: Task = create_test_entity("archived").into();
        assert_eq!(task.status, TaskStatus::Pending);
    }
}
