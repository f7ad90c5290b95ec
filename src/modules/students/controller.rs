use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::middleware::auth::AuthGuard;
use crate::modules::classes::model::Class;
use crate::modules::classes::service::ClassService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;
use crate::validator::ValidatedJson;

use super::model::{
    ClassIdsRequest, CreateStudentDto, Student, StudentFilterParams, StudentListResponse,
    UpdateStudentDto,
};
use super::service::StudentService;

/// List students with their enrollments
#[utoipa::path(
    get,
    path = "/sims/api/v1/students",
    params(StudentFilterParams),
    responses(
        (status = 200, description = "Active students with enrollments", body = StudentListResponse),
        (status = 401, description = "Missing or malformed credentials"),
        (status = 403, description = "Invalid access token")
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_students(
    State(state): State<AppState>,
    _guard: AuthGuard,
    Query(params): Query<StudentFilterParams>,
) -> Result<Json<StudentListResponse>, AppError> {
    let response = StudentService::get_students(&state.db, params).await?;
    Ok(Json(response))
}

/// Create a student with an initial enrollment set
#[utoipa::path(
    post,
    path = "/sims/api/v1/students",
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student and enrollments created atomically"),
        (status = 400, description = "Missing fields or empty class_ids"),
        (status = 401, description = "Missing or malformed credentials"),
        (status = 403, description = "Invalid access token")
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn add_student(
    State(state): State<AppState>,
    _guard: AuthGuard,
    ValidatedJson(dto): ValidatedJson<CreateStudentDto>,
) -> Result<(StatusCode, Json<ApiResponse<Student>>), AppError> {
    let student = StudentService::add_student(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Student added successfully", student)),
    ))
}

/// Edit a student and replace their enrollment set
#[utoipa::path(
    put,
    path = "/sims/api/v1/students/{id}",
    params(("id" = i32, Path, description = "Student ID")),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated, enrollments resynced"),
        (status = 401, description = "Missing or malformed credentials"),
        (status = 403, description = "Invalid access token"),
        (status = 404, description = "Student not found")
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn edit_student(
    State(state): State<AppState>,
    _guard: AuthGuard,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateStudentDto>,
) -> Result<Json<ApiResponse<Student>>, AppError> {
    let student = StudentService::edit_student(&state.db, id, dto).await?;
    Ok(Json(ApiResponse::ok("Student edited successfully", student)))
}

/// Soft-delete a student
#[utoipa::path(
    delete,
    path = "/sims/api/v1/students/{id}",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student marked inactive"),
        (status = 401, description = "Missing or malformed credentials"),
        (status = 403, description = "Invalid access token"),
        (status = 404, description = "Student not found")
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    _guard: AuthGuard,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    StudentService::delete_student(&state.db, id).await?;
    Ok(Json(ApiResponse::message("Student deleted successfully")))
}

/// Fetch the classes behind a student's enrollment ids
#[utoipa::path(
    post,
    path = "/sims/api/v1/students/classes",
    request_body = ClassIdsRequest,
    responses(
        (status = 200, description = "Classes matching the given ids"),
        (status = 400, description = "class_ids missing or empty"),
        (status = 401, description = "Missing or malformed credentials"),
        (status = 403, description = "Invalid access token")
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_classes_for_student(
    State(state): State<AppState>,
    _guard: AuthGuard,
    ValidatedJson(dto): ValidatedJson<ClassIdsRequest>,
) -> Result<Json<ApiResponse<Vec<Class>>>, AppError> {
    let classes = ClassService::get_classes_by_ids(&state.db, &dto.class_ids).await?;
    Ok(Json(ApiResponse::ok("Classes fetched successfully", classes)))
}
