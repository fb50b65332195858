//! Health check endpoint handlers.

use axum::{extract::State, Json};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use shared::time::now_ist;
use tracing::warn;

use crate::app::AppState;
use crate::error::ApiError;

/// Liveness response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<FixedOffset>,
}

/// Simple status response for readiness probes.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// Liveness check. Does not touch the database.
///
/// GET /api/health, GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: now_ist(),
    })
}

/// Readiness probe: 200 when the database answers, 503 otherwise.
///
/// GET /api/health/ready
pub async fn ready(State(state): State<AppState>) -> Result<Json<StatusResponse>, ApiError> {
    persistence::metrics::record_pool_metrics(&state.pool);

    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => Ok(Json(StatusResponse { status: "ready" })),
        Err(e) => {
            warn!(error = %e, "Readiness check failed");
            Err(ApiError::ServiceUnavailable("Database unavailable".to_string()))
        }
    }
}
