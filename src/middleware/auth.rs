use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};

use crate::config::jwt::JwtConfig;
use crate::utils::errors::AppError;
use crate::utils::jwt::{AccessClaims, validate_access_token, validate_refresh_token};

pub const REFRESH_TOKEN_HEADER: &str = "x-refresh-token";

/// Extractor gating every protected route.
///
/// Requires a valid `Authorization: Bearer <token>` access credential and,
/// when an `x-refresh-token` header is present, a valid refresh credential
/// alongside it. Requests that pass continue unchanged.
#[derive(Debug, Clone)]
pub struct AuthGuard(pub AccessClaims);

impl<S> FromRequestParts<S> for AuthGuard
where
    JwtConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jwt_config = JwtConfig::from_ref(state);

        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Authorization header missing")))?;

        let access_token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::unauthorized(anyhow::anyhow!("Invalid authorization header format"))
        })?;

        if access_token.is_empty() {
            return Err(AppError::unauthorized(anyhow::anyhow!("Access token missing")));
        }

        let claims = validate_access_token(access_token, &jwt_config)
            .ok_or_else(|| AppError::forbidden(anyhow::anyhow!("Invalid access token")))?;

        // The refresh header is optional, but when sent it has to be valid.
        if let Some(refresh_token) = parts
            .headers
            .get(REFRESH_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
        {
            validate_refresh_token(refresh_token, &jwt_config)
                .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Invalid refresh token")))?;
        }

        Ok(AuthGuard(claims))
    }
}
