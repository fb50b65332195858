//! Event logging endpoint handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use domain::models::log_entry::{LogEventRequest, LogEventResponse};
use domain::models::{AutomationEvent, LogSubmission};

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::EventLogger;

/// Log an event from a JSON body.
///
/// POST /api/log
pub async fn log_event(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<LogEventRequest>, ApiError>,
) -> Result<Json<LogEventResponse>, ApiError> {
    let submission = request.into_submission()?;
    let entry = EventLogger::new(state.pool.clone())
        .record(submission, None)
        .await?;

    Ok(Json(LogEventResponse::logged(&entry)))
}

/// Log an arrival or exit from URL segments, as sent by phone automations.
/// Always recorded with mode "iPhone".
///
/// GET|POST /api/:event/:lat/:lon
pub async fn log_event_from_path(
    State(state): State<AppState>,
    Path((event, lat, lon)): Path<(String, String, String)>,
) -> Result<Json<LogEventResponse>, ApiError> {
    let event = AutomationEvent::parse(&event)?;
    log_automation_event(state, event, &lat, &lon).await
}

/// GET|POST /api/arrive/:lat/:lon
pub async fn log_arrival(
    State(state): State<AppState>,
    Path((lat, lon)): Path<(String, String)>,
) -> Result<Json<LogEventResponse>, ApiError> {
    log_automation_event(state, AutomationEvent::Arrive, &lat, &lon).await
}

/// GET|POST /api/exit/:lat/:lon
pub async fn log_exit(
    State(state): State<AppState>,
    Path((lat, lon)): Path<(String, String)>,
) -> Result<Json<LogEventResponse>, ApiError> {
    log_automation_event(state, AutomationEvent::Exit, &lat, &lon).await
}

async fn log_automation_event(
    state: AppState,
    event: AutomationEvent,
    lat: &str,
    lon: &str,
) -> Result<Json<LogEventResponse>, ApiError> {
    let submission = LogSubmission::from_automation(event, lat, lon)?;
    let entry = EventLogger::new(state.pool)
        .record(submission, Some(event))
        .await?;

    Ok(Json(
        LogEventResponse::logged(&entry).with_automation_details(&entry),
    ))
}
