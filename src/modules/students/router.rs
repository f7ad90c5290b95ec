use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

use super::controller::{
    add_student, delete_student, edit_student, get_classes_for_student, get_students,
};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_students).post(add_student))
        .route("/classes", post(get_classes_for_student))
        .route("/{id}", put(edit_student).delete(delete_student))
}
