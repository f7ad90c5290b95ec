use axum::{Json, extract::State};
use tracing::instrument;

use crate::middleware::auth::AuthGuard;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;

use super::model::{ChartData, HeaderCards};
use super::service::DashboardService;

/// Aggregate counts for the dashboard header cards
#[utoipa::path(
    get,
    path = "/sims/api/v1/dashboard/header-cards",
    responses(
        (status = 200, description = "Student and class totals"),
        (status = 401, description = "Missing or malformed credentials"),
        (status = 403, description = "Invalid access token")
    ),
    tag = "Dashboard",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn header_cards(
    State(state): State<AppState>,
    _guard: AuthGuard,
) -> Result<Json<ApiResponse<HeaderCards>>, AppError> {
    let cards = DashboardService::header_cards(&state.db).await?;
    Ok(Json(ApiResponse::ok(
        "Dashboard header card fetched successfully",
        cards,
    )))
}

/// Chart aggregates: running classes, revenue per type and month, teachers
#[utoipa::path(
    get,
    path = "/sims/api/v1/dashboard/chart",
    responses(
        (status = 200, description = "Chart data"),
        (status = 401, description = "Missing or malformed credentials"),
        (status = 403, description = "Invalid access token")
    ),
    tag = "Dashboard",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn chart_data(
    State(state): State<AppState>,
    _guard: AuthGuard,
) -> Result<Json<ApiResponse<ChartData>>, AppError> {
    let data = DashboardService::chart_data(&state.db).await?;
    Ok(Json(ApiResponse::ok("Chart data fetched successfully", data)))
}
