//! Task domain model.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::lenient::double_option;
use validator::Validate;

use crate::error::{require, RequestError};
use crate::models::common::non_blank;

/// Priority assigned when the client does not send one.
pub const DEFAULT_PRIORITY: &str = "medium";

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Converts to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Parses from database string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(TaskStatus::Pending),
            "in_progress" => Some(TaskStatus::InProgress),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

/// Represents a task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_at: DateTime<FixedOffset>,
    pub completed_at: Option<DateTime<FixedOffset>>,
    pub priority: String,
    pub due_by: Option<NaiveDate>,
}

/// Request payload for creating a task.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub due_by: Option<NaiveDate>,
}

/// A validated task ready to be stored.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewTask {
    pub id: String,
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    pub description: String,
    pub created_at: DateTime<FixedOffset>,
    pub priority: String,
    pub due_by: Option<NaiveDate>,
}

impl CreateTaskRequest {
    pub fn into_new_task(self, id: String, now: DateTime<FixedOffset>) -> Result<NewTask, RequestError> {
        Ok(NewTask {
            id,
            title: require(self.title, "title")?,
            description: self.description.unwrap_or_default(),
            created_at: now,
            priority: self.priority.unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
            due_by: self.due_by,
        })
    }
}

/// Request payload for a partial task update.
///
/// `description` and `due_by` distinguish "absent" from an explicit `null`,
/// which clears the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskRequest {
    pub status: Option<TaskStatus>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_by: Option<Option<NaiveDate>>,
}

/// Field-by-field task update. `None` leaves a column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub priority: Option<String>,
    pub due_by: Option<Option<NaiveDate>>,
    pub status: Option<TaskStatus>,
    /// Follows `status`: set on completion, cleared on any other status.
    pub completed_at: Option<Option<DateTime<FixedOffset>>>,
}

impl UpdateTaskRequest {
    pub fn into_patch(self, now: DateTime<FixedOffset>) -> Result<TaskPatch, RequestError> {
        if self.status.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.due_by.is_none()
        {
            return Err(RequestError::NoFieldsToUpdate);
        }

        if matches!(self.title.as_deref(), Some(t) if t.is_empty()) {
            return Err(RequestError::invalid_value("title", "must not be empty"));
        }

        let completed_at = self.status.map(|status| match status {
            TaskStatus::Completed => Some(now),
            _ => None,
        });

        Ok(TaskPatch {
            title: self.title,
            description: self.description,
            priority: self.priority,
            due_by: self.due_by,
            status: self.status,
            completed_at,
        })
    }
}

/// Query parameters for listing tasks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTasksQuery {
    pub status: Option<String>,
}

impl ListTasksQuery {
    pub fn status_filter(self) -> Result<Option<TaskStatus>, RequestError> {
        non_blank(self.status)
            .map(|s| {
                TaskStatus::parse(s.trim()).ok_or_else(|| {
                    RequestError::invalid_value(
                        "status",
                        "expected one of pending, in_progress, completed",
                    )
                })
            })
            .transpose()
    }
}

/// Response for listing tasks.
#[derive(Debug, Clone, Serialize)]
pub struct ListTasksResponse {
    pub success: bool,
    pub tasks: Vec<Task>,
}

/// Response for a newly created task.
#[derive(Debug, Clone, Serialize)]
pub struct TaskCreatedResponse {
    pub success: bool,
    pub message: String,
    pub task: Task,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared::time::ist;

    fn now() -> DateTime<FixedOffset> {
        ist().with_ymd_and_hms(2024, 6, 1, 18, 0, 0).unwrap()
    }

    #[test]
    fn test_task_status_serialization() {
        assert_eq!(serde_json::to_string(&TaskStatus::InProgress).unwrap(), "\"in_progress\"");
        let parsed: TaskStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, TaskStatus::Completed);
        assert!(serde_json::from_str::<TaskStatus>("\"done\"").is_err());
    }

    #[test]
    fn test_task_status_parse() {
        for status in [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed] {
            assert_eq!(TaskStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TaskStatus::parse("archived"), None);
    }

    #[test]
    fn test_create_task_request_defaults() {
        let request: CreateTaskRequest = serde_json::from_str(r#"{"title": "Write report"}"#).unwrap();
        let task = request.into_new_task("task_1".to_string(), now()).unwrap();
        assert_eq!(task.title, "Write report");
        assert_eq!(task.description, "");
        assert_eq!(task.priority, "medium");
        assert_eq!(task.due_by, None);
        assert_eq!(task.created_at, now());
    }

    #[test]
    fn test_create_task_request_requires_title() {
        let request: CreateTaskRequest =
            serde_json::from_str(r#"{"description": "no title"}"#).unwrap();
        let err = request.into_new_task("task_1".to_string(), now()).unwrap_err();
        assert_eq!(err, RequestError::MissingField("title"));
    }

    #[test]
    fn test_create_task_request_due_by() {
        let request: CreateTaskRequest =
            serde_json::from_str(r#"{"title": "t", "due_by": "2024-07-15"}"#).unwrap();
        assert_eq!(request.due_by, NaiveDate::from_ymd_opt(2024, 7, 15));
    }

    #[test]
    fn test_patch_completion_sets_timestamp() {
        let request: UpdateTaskRequest = serde_json::from_str(r#"{"status": "completed"}"#).unwrap();
        let patch = request.into_patch(now()).unwrap();
        assert_eq!(patch.status, Some(TaskStatus::Completed));
        assert_eq!(patch.completed_at, Some(Some(now())));
    }

    #[test]
    fn test_patch_other_status_clears_timestamp() {
        let request: UpdateTaskRequest = serde_json::from_str(r#"{"status": "pending"}"#).unwrap();
        let patch = request.into_patch(now()).unwrap();
        assert_eq!(patch.completed_at, Some(None));
    }

    #[test]
    fn test_patch_without_status_leaves_timestamp() {
        let request: UpdateTaskRequest =
            serde_json::from_str(r#"{"title": "Renamed", "description": null}"#).unwrap();
        let patch = request.into_patch(now()).unwrap();
        assert_eq!(patch.title.as_deref(), Some("Renamed"));
        assert_eq!(patch.description, Some(None));
        assert_eq!(patch.status, None);
        assert_eq!(patch.completed_at, None);
    }

    #[test]
    fn test_empty_patch_rejected() {
        let request: UpdateTaskRequest = serde_json::from_str(r#"{"unrelated": 1}"#).unwrap();
        assert_eq!(request.into_patch(now()).unwrap_err(), RequestError::NoFieldsToUpdate);
    }

    #[test]
    fn test_list_tasks_query_status_filter() {
        let query = ListTasksQuery {
            status: Some("in_progress".to_string()),
        };
        assert_eq!(query.status_filter(), Ok(Some(TaskStatus::InProgress)));
        assert_eq!(ListTasksQuery::default().status_filter(), Ok(None));
        let bad = ListTasksQuery {
            status: Some("done".to_string()),
        };
        assert!(bad.status_filter().is_err());
    }

    #[test]
    fn test_task_serialization() {
        let task = Task {
            id: "task_1".to_string(),
            title: "t".to_string(),
            description: None,
            status: TaskStatus::Pending,
            created_at: now(),
            completed_at: None,
            priority: "high".to_string(),
            due_by: None,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["created_at"], "2024-06-01T18:00:00+05:30");
        assert!(json["completed_at"].is_null());
    }
}
