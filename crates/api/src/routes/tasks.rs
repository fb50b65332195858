//! Task endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use domain::models::task::{
    CreateTaskRequest, ListTasksQuery, ListTasksResponse, TaskCreatedResponse, UpdateTaskRequest,
};
use domain::models::{MessageResponse, Task};
use persistence::repositories::TaskRepository;
use shared::ids::task_id;
use shared::time::now_ist;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

const TASK_NOT_FOUND: &str = "Task not found";

/// List tasks, newest first.
///
/// GET /api/tasks?status=pending|in_progress|completed
pub async fn list_tasks(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<ListTasksQuery>, ApiError>,
) -> Result<Json<ListTasksResponse>, ApiError> {
    let status = query.status_filter()?;
    let tasks = TaskRepository::new(state.pool.clone())
        .list(status)
        .await?
        .into_iter()
        .map(Task::from)
        .collect();

    Ok(Json(ListTasksResponse {
        success: true,
        tasks,
    }))
}

/// Create a pending task.
///
/// POST /api/tasks
pub async fn create_task(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<CreateTaskRequest>, ApiError>,
) -> Result<Json<TaskCreatedResponse>, ApiError> {
    let now = now_ist();
    let new_task = request.into_new_task(task_id(&now), now)?;
    new_task.validate()?;

    let task: Task = TaskRepository::new(state.pool.clone())
        .create(&new_task)
        .await?
        .into();

    info!(task_id = %task.id, priority = %task.priority, "Task created");

    Ok(Json(TaskCreatedResponse {
        success: true,
        message: format!("Task '{}' added successfully", task.title),
        task,
    }))
}

/// Partially update a task. Moving to `completed` stamps `completed_at`;
/// any other status clears it.
///
/// PUT /api/tasks/:id
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(request), _): WithRejection<Json<UpdateTaskRequest>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    let patch = request.into_patch(now_ist())?;

    let task: Task = TaskRepository::new(state.pool.clone())
        .update(&id, &patch)
        .await?
        .ok_or_else(|| ApiError::not_found(TASK_NOT_FOUND))?
        .into();

    info!(task_id = %task.id, status = task.status.as_str(), "Task updated");
    Ok(Json(MessageResponse::ok(format!("Task {} updated", id))))
}

/// DELETE /api/tasks/:id
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = TaskRepository::new(state.pool.clone()).delete(&id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found(TASK_NOT_FOUND));
    }

    info!(task_id = %id, "Task deleted");
    Ok(Json(MessageResponse::ok(format!("Task {} deleted", id))))
}
