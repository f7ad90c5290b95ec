use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::controller::{add_class, delete_class, edit_class, get_classes};

pub fn init_classes_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_classes).post(add_class))
        .route("/{id}", put(edit_class).delete(delete_class))
}
