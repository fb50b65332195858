//! Dashboard endpoint handler.

use axum::{extract::State, Json};
use domain::models::DashboardResponse;
use persistence::repositories::DashboardRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// Aggregated log and task statistics.
///
/// GET /api/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let dashboard = DashboardRepository::new(state.pool.clone())
        .get_dashboard()
        .await?;

    Ok(Json(DashboardResponse {
        success: true,
        dashboard,
    }))
}
