use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::routing::get;
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::auth::REFRESH_TOKEN_HEADER;
use crate::modules::auth::router::init_auth_router;
use crate::modules::classes::router::init_classes_router;
use crate::modules::dashboard::router::init_dashboard_router;
use crate::modules::students::router::init_students_router;
use crate::state::AppState;

async fn root() -> &'static str {
    "Server is running!"
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/", get(root))
        .nest(
            "/sims/api/v1",
            Router::new()
                .nest("/auth", init_auth_router())
                .nest("/students", init_students_router())
                .nest("/classes", init_classes_router())
                .nest("/dashboard", init_dashboard_router()),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            // The frontend reads the token pair out of these response
            // headers, so they have to be exposed through CORS.
            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    header::AUTHORIZATION,
                    header::CONTENT_TYPE,
                    header::ACCEPT,
                    HeaderName::from_static(REFRESH_TOKEN_HEADER),
                ])
                .expose_headers([
                    header::AUTHORIZATION,
                    HeaderName::from_static(REFRESH_TOKEN_HEADER),
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
