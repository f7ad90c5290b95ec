//! Access/refresh token issuance and validation.
//!
//! Both tokens are signed from the same identity at login, each with its own
//! secret and lifetime. Validation is deliberately infallible at the type
//! level: a bad signature, an expired token and a malformed token all come
//! back as `None`, and the caller decides which error the client sees.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::jwt::JwtConfig;
use crate::utils::errors::AppError;

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub id: i32,
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

/// Claims carried by a refresh token.
///
/// The secondary attribute is named `email` here but `name` in the access
/// claims; login fills both from the same display value. The wire format is
/// kept as-is for compatibility with existing clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub id: i32,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Signs a fresh access/refresh pair for the given identity.
pub fn issue_token_pair(id: i32, name: &str, config: &JwtConfig) -> Result<TokenPair, AppError> {
    let now = Utc::now().timestamp();

    let access_claims = AccessClaims {
        id,
        name: name.to_string(),
        iat: now,
        exp: now + config.access_token_expiry,
    };
    let access_token = encode(
        &Header::default(),
        &access_claims,
        &EncodingKey::from_secret(config.access_secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to sign access token: {e}")))?;

    let refresh_claims = RefreshClaims {
        id,
        email: name.to_string(),
        iat: now,
        exp: now + config.refresh_token_expiry,
    };
    let refresh_token = encode(
        &Header::default(),
        &refresh_claims,
        &EncodingKey::from_secret(config.refresh_secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to sign refresh token: {e}")))?;

    Ok(TokenPair {
        access_token,
        refresh_token,
    })
}

// Zero leeway: a token is invalid the second its exp passes.
fn strict_validation() -> Validation {
    let mut validation = Validation::default();
    validation.leeway = 0;
    validation
}

/// Verifies `token` against the access secret. `None` on any failure.
pub fn validate_access_token(token: &str, config: &JwtConfig) -> Option<AccessClaims> {
    decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(config.access_secret.as_bytes()),
        &strict_validation(),
    )
    .map(|data| data.claims)
    .ok()
}

/// Verifies `token` against the refresh secret. `None` on any failure.
pub fn validate_refresh_token(token: &str, config: &JwtConfig) -> Option<RefreshClaims> {
    decode::<RefreshClaims>(
        token,
        &DecodingKey::from_secret(config.refresh_secret.as_bytes()),
        &strict_validation(),
    )
    .map(|data| data.claims)
    .ok()
}
