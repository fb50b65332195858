//! Journal event endpoint handlers (`/api/events`).

use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use domain::models::journal_event::{
    CreateJournalEventRequest, JournalEventCreatedResponse, ListJournalEventsResponse,
    UpdateJournalEventRequest,
};
use domain::models::{JournalEvent, MessageResponse};
use persistence::repositories::JournalEventRepository;
use shared::ids::journal_event_id;
use shared::time::now_ist;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

const EVENT_NOT_FOUND: &str = "Event not found";

/// GET /api/events
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<ListJournalEventsResponse>, ApiError> {
    let events = JournalEventRepository::new(state.pool.clone())
        .list()
        .await?
        .into_iter()
        .map(JournalEvent::from)
        .collect();

    Ok(Json(ListJournalEventsResponse {
        success: true,
        events,
    }))
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<CreateJournalEventRequest>, ApiError>,
) -> Result<Json<JournalEventCreatedResponse>, ApiError> {
    let new_event = request.into_new_event(journal_event_id(&now_ist()))?;
    new_event.validate()?;

    let event: JournalEvent = JournalEventRepository::new(state.pool.clone())
        .create(&new_event)
        .await?
        .into();

    info!(event_id = %event.id, date = %event.date, "Journal event created");

    Ok(Json(JournalEventCreatedResponse {
        success: true,
        message: format!("Event '{}' added successfully", event.title),
        event,
    }))
}

/// PUT /api/events/:id
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(request), _): WithRejection<Json<UpdateJournalEventRequest>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    let patch = request.into_patch()?;

    JournalEventRepository::new(state.pool.clone())
        .update(&id, &patch)
        .await?
        .ok_or_else(|| ApiError::not_found(EVENT_NOT_FOUND))?;

    info!(event_id = %id, "Journal event updated");
    Ok(Json(MessageResponse::ok(format!("Event {} updated", id))))
}

/// DELETE /api/events/:id
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = JournalEventRepository::new(state.pool.clone())
        .delete(&id)
        .await?;
    if deleted == 0 {
        return Err(ApiError::not_found(EVENT_NOT_FOUND));
    }

    info!(event_id = %id, "Journal event deleted");
    Ok(Json(MessageResponse::ok(format!("Event {} deleted", id))))
}
