use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::middleware::auth::AuthGuard;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;
use crate::validator::ValidatedJson;

use super::model::{Class, ClassFilterParams, ClassListResponse, CreateClassDto, UpdateClassDto};
use super::service::ClassService;

/// List classes
#[utoipa::path(
    get,
    path = "/sims/api/v1/classes",
    params(ClassFilterParams),
    responses(
        (status = 200, description = "Active classes, newest first", body = ClassListResponse),
        (status = 401, description = "Missing or malformed credentials"),
        (status = 403, description = "Invalid access token")
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_classes(
    State(state): State<AppState>,
    _guard: AuthGuard,
    Query(params): Query<ClassFilterParams>,
) -> Result<Json<ClassListResponse>, AppError> {
    let response = ClassService::get_classes(&state.db, params).await?;
    Ok(Json(response))
}

/// Create a class
#[utoipa::path(
    post,
    path = "/sims/api/v1/classes",
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Class created"),
        (status = 400, description = "Missing or malformed fields"),
        (status = 401, description = "Missing or malformed credentials"),
        (status = 403, description = "Invalid access token")
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn add_class(
    State(state): State<AppState>,
    _guard: AuthGuard,
    ValidatedJson(dto): ValidatedJson<CreateClassDto>,
) -> Result<(StatusCode, Json<ApiResponse<Class>>), AppError> {
    let class = ClassService::add_class(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Class added successfully", class)),
    ))
}

/// Edit a class
#[utoipa::path(
    put,
    path = "/sims/api/v1/classes/{id}",
    params(("id" = i32, Path, description = "Class ID")),
    request_body = UpdateClassDto,
    responses(
        (status = 200, description = "Class updated"),
        (status = 401, description = "Missing or malformed credentials"),
        (status = 403, description = "Invalid access token"),
        (status = 404, description = "Class not found")
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn edit_class(
    State(state): State<AppState>,
    _guard: AuthGuard,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateClassDto>,
) -> Result<Json<ApiResponse<Class>>, AppError> {
    let class = ClassService::edit_class(&state.db, id, dto).await?;
    Ok(Json(ApiResponse::ok("Class edited successfully", class)))
}

/// Soft-delete a class
#[utoipa::path(
    delete,
    path = "/sims/api/v1/classes/{id}",
    params(("id" = i32, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Class marked inactive"),
        (status = 401, description = "Missing or malformed credentials"),
        (status = 403, description = "Invalid access token"),
        (status = 404, description = "Class not found")
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_class(
    State(state): State<AppState>,
    _guard: AuthGuard,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Class>>, AppError> {
    let class = ClassService::delete_class(&state.db, id).await?;
    Ok(Json(ApiResponse::ok("Class deleted successfully", class)))
}
