use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{login, logout, refresh_token};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/refresh-token", post(refresh_token))
}
