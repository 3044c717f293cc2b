//! Dashboard overview handler

use axum::{extract::State, Json};
use haven_service::{OverviewResponse, OverviewService};

use crate::extractors::AdminUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Aggregated dashboard overview (read-only)
///
/// GET /admin/overview
pub async fn overview(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<OverviewResponse>> {
    let service = OverviewService::new(state.service_context());
    let response = service.overview().await?;
    Ok(Json(response))
}
