//! Log history endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use domain::models::log_entry::{ListLogsQuery, ListLogsResponse, LogItem};
use domain::models::{LogEntry, MessageResponse};
use persistence::repositories::LogRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;

const LOG_NOT_FOUND: &str = "Log entry not found";

/// List log entries, newest first.
///
/// GET /api/logs?date=YYYY-MM-DD&event=&place=&limit=
pub async fn list_logs(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<ListLogsQuery>, ApiError>,
) -> Result<Json<ListLogsResponse>, ApiError> {
    let filter = query.into_filter()?;
    let entities = LogRepository::new(state.pool.clone()).list(&filter).await?;

    let logs: Vec<LogItem> = entities
        .into_iter()
        .map(LogEntry::from)
        .map(LogItem::from)
        .collect();

    Ok(Json(ListLogsResponse {
        success: true,
        total: logs.len(),
        logs,
    }))
}

/// Delete a log entry.
///
/// DELETE /api/logs/:id
pub async fn delete_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    // Ids are integers; anything else cannot name an entry.
    let id: i64 = id.parse().map_err(|_| ApiError::not_found(LOG_NOT_FOUND))?;

    let deleted = LogRepository::new(state.pool.clone()).delete(id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found(LOG_NOT_FOUND));
    }

    info!(log_id = id, "Log entry deleted");
    Ok(Json(MessageResponse::ok("Log entry deleted successfully")))
}
