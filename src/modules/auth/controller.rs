use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, HeaderValue, header};
use tracing::instrument;

use crate::middleware::auth::REFRESH_TOKEN_HEADER;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::TokenPair;
use crate::utils::response::ApiResponse;
use crate::validator::ValidatedJson;

use super::model::{LoginRequest, UserSummary};
use super::service::AuthService;

fn token_headers(tokens: &TokenPair) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", tokens.access_token))
            .map_err(|e| AppError::internal(anyhow::anyhow!("Invalid token header: {e}")))?,
    );
    headers.insert(
        HeaderName::from_static(REFRESH_TOKEN_HEADER),
        HeaderValue::from_str(&tokens.refresh_token)
            .map_err(|e| AppError::internal(anyhow::anyhow!("Invalid token header: {e}")))?,
    );
    Ok(headers)
}

/// Login with email and password
///
/// On success the access token is returned in the `Authorization` response
/// header and the refresh token in `x-refresh-token`.
#[utoipa::path(
    post,
    path = "/sims/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, tokens set in response headers"),
        (status = 400, description = "Missing or malformed email/password"),
        (status = 401, description = "Wrong password"),
        (status = 404, description = "No user with that email")
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<(HeaderMap, Json<ApiResponse<UserSummary>>), AppError> {
    let (tokens, user) = AuthService::login(&state.db, dto, &state.jwt_config).await?;
    let headers = token_headers(&tokens)?;

    Ok((headers, Json(ApiResponse::ok("Login successful", user))))
}

/// Logout
///
/// Stateless: tokens are self-expiring, so logout just blanks the token
/// headers and the client discards its copies.
#[utoipa::path(
    post,
    path = "/sims/api/v1/auth/logout",
    responses(
        (status = 200, description = "Logout successful, token headers cleared")
    ),
    tag = "Authentication"
)]
#[instrument]
pub async fn logout() -> (HeaderMap, Json<ApiResponse<()>>) {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static(""));
    headers.insert(
        HeaderName::from_static(REFRESH_TOKEN_HEADER),
        HeaderValue::from_static(""),
    );

    (headers, Json(ApiResponse::message("Logout successful")))
}

/// Exchange a refresh token for a new token pair
#[utoipa::path(
    post,
    path = "/sims/api/v1/auth/refresh-token",
    responses(
        (status = 200, description = "New token pair set in response headers"),
        (status = 401, description = "x-refresh-token header missing"),
        (status = 403, description = "Refresh token invalid or expired")
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, request_headers))]
pub async fn refresh_token(
    State(state): State<AppState>,
    request_headers: HeaderMap,
) -> Result<(HeaderMap, Json<ApiResponse<()>>), AppError> {
    let old_refresh_token = request_headers
        .get(REFRESH_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Refresh token missing")))?;

    let tokens = AuthService::refresh(old_refresh_token, &state.jwt_config)?;
    let headers = token_headers(&tokens)?;

    Ok((headers, Json(ApiResponse::message("Refresh successful"))))
}
