//! CSV export endpoint handler.

use axum::{
    body::Body,
    extract::{Query, State},
    http::header,
    response::Response,
};
use axum_extra::extract::WithRejection;
use domain::models::{JournalEvent, LogEntry, LogFilter, Place, Task};
use persistence::repositories::{JournalEventRepository, LogRepository, PlaceRepository, TaskRepository};
use serde::Deserialize;
use shared::time::now_ist;
use sqlx::PgPool;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::{CsvDocument, ExportKind};

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Query parameters for `GET /api/export`.
#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
    #[serde(rename = "type")]
    pub export_type: Option<String>,
}

/// Download one view (or all four) as CSV.
///
/// GET /api/export?format=csv&type=logs|places|tasks|events|combined
pub async fn export_data(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<ExportQuery>, ApiError>,
) -> Result<Response, ApiError> {
    if query.format.as_deref().unwrap_or("csv") != "csv" {
        return Err(ApiError::validation("Unsupported format"));
    }
    let kind = ExportKind::parse(query.export_type.as_deref().unwrap_or("logs"))?;

    let pool = &state.pool;
    let mut doc = CsvDocument::new();
    match kind {
        ExportKind::Logs => doc.logs(&load_logs(pool).await?)?,
        ExportKind::Places => doc.places(&load_places(pool).await?)?,
        ExportKind::Tasks => doc.tasks(&load_tasks(pool).await?)?,
        ExportKind::Events => doc.events(&load_events(pool).await?)?,
        ExportKind::Combined => {
            doc.section("LOGS");
            doc.logs(&load_logs(pool).await?)?;
            doc.section("PLACES");
            doc.places(&load_places(pool).await?)?;
            doc.section("TASKS");
            doc.tasks(&load_tasks(pool).await?)?;
            doc.section("EVENTS");
            doc.events(&load_events(pool).await?)?;
        }
    }

    let filename = kind.filename(&now_ist());
    let body = doc.into_bytes();
    info!(export_type = kind.as_str(), bytes = body.len(), filename = %filename, "Export generated");

    Response::builder()
        .header(header::CONTENT_TYPE, CSV_CONTENT_TYPE)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(Body::from(body))
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to build response");
            ApiError::Internal("Failed to build response".to_string())
        })
}

async fn load_logs(pool: &PgPool) -> Result<Vec<LogEntry>, sqlx::Error> {
    let entities = LogRepository::new(pool.clone()).list(&LogFilter::default()).await?;
    Ok(entities.into_iter().map(LogEntry::from).collect())
}

async fn load_places(pool: &PgPool) -> Result<Vec<Place>, sqlx::Error> {
    let entities = PlaceRepository::new(pool.clone()).find_all().await?;
    Ok(entities.into_iter().map(Place::from).collect())
}

async fn load_tasks(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
    let entities = TaskRepository::new(pool.clone()).list(None).await?;
    Ok(entities.into_iter().map(Task::from).collect())
}

async fn load_events(pool: &PgPool) -> Result<Vec<JournalEvent>, sqlx::Error> {
    let entities = JournalEventRepository::new(pool.clone()).list().await?;
    Ok(entities.into_iter().map(JournalEvent::from).collect())
}
