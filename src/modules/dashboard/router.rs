use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{chart_data, header_cards};

pub fn init_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/header-cards", get(header_cards))
        .route("/chart", get(chart_data))
}
