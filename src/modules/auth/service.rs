use sqlx::PgPool;
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::utils::errors::AppError;
use crate::utils::jwt::{TokenPair, issue_token_pair, validate_refresh_token};
use crate::utils::password::verify_password;

use super::model::{LoginRequest, UserSummary};

pub struct AuthService;

impl AuthService {
    /// Verifies credentials and issues a fresh token pair.
    ///
    /// Unknown email maps to 404 and a wrong password to 401, so clients can
    /// tell the cases apart.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<(TokenPair, UserSummary), AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: i32,
            name: String,
            email: String,
            password: String,
        }

        let user = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, name, email, password FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        let is_match = verify_password(&dto.password, &user.password)?;
        if !is_match {
            return Err(AppError::unauthorized(anyhow::anyhow!("Invalid password")));
        }

        let tokens = issue_token_pair(user.id, &user.name, jwt_config)?;

        Ok((
            tokens,
            UserSummary {
                id: user.id,
                name: user.name,
                email: user.email,
            },
        ))
    }

    /// Exchanges a still-valid refresh token for a new token pair.
    ///
    /// The new pair is issued from the decoded identity; the old token keeps
    /// counting down on its own expiry (there is no server-side revocation).
    #[instrument(skip(refresh_token, jwt_config))]
    pub fn refresh(refresh_token: &str, jwt_config: &JwtConfig) -> Result<TokenPair, AppError> {
        let claims = validate_refresh_token(refresh_token, jwt_config)
            .ok_or_else(|| AppError::forbidden(anyhow::anyhow!("Invalid refresh token")))?;

        issue_token_pair(claims.id, &claims.email, jwt_config)
    }
}
