//! Place endpoint handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use domain::models::place::{CreatePlaceRequest, ListPlacesResponse, PlaceCreatedResponse};
use domain::models::{MessageResponse, Place};
use persistence::repositories::PlaceRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// List places ordered by name.
///
/// GET /api/places
pub async fn list_places(
    State(state): State<AppState>,
) -> Result<Json<ListPlacesResponse>, ApiError> {
    let places = PlaceRepository::new(state.pool.clone())
        .find_all()
        .await?
        .into_iter()
        .map(Place::from)
        .collect();

    Ok(Json(ListPlacesResponse {
        success: true,
        places,
    }))
}

/// Register a place. Its name becomes its id and must be unique.
///
/// POST /api/places
pub async fn create_place(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<CreatePlaceRequest>, ApiError>,
) -> Result<Json<PlaceCreatedResponse>, ApiError> {
    let new_place = request.into_new_place()?;
    new_place.validate()?;

    let already_exists = || ApiError::validation(format!("Place '{}' already exists", new_place.name));

    let repo = PlaceRepository::new(state.pool.clone());
    if repo.exists_by_name(&new_place.name).await? {
        return Err(already_exists());
    }

    // A concurrent insert of the same name surfaces as a unique violation.
    let place: Place = match repo.create(&new_place).await {
        Ok(entity) => entity.into(),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => return Err(already_exists()),
        Err(e) => return Err(e.into()),
    };

    info!(
        place = %place.name,
        geofence_radius = place.geofence_radius,
        "Place created"
    );

    Ok(Json(PlaceCreatedResponse {
        success: true,
        message: format!("Place '{}' added successfully", place.name),
        place,
    }))
}

/// Delete a place. Log entries that referenced it keep their history but
/// report the place as "unknown".
///
/// DELETE /api/places/:id
pub async fn delete_place(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = PlaceRepository::new(state.pool.clone()).delete(&id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("Place not found"));
    }

    info!(place_id = %id, "Place deleted");
    Ok(Json(MessageResponse::ok(format!("Place {} deleted", id))))
}
