//! PostgreSQL connection pool initialization.
//!
//! The pool is created once at startup from `DATABASE_URL`, stored in the
//! application state and cloned into every handler that needs it. All durable
//! state lives behind this pool; cross-request ordering is delegated to the
//! database's transaction isolation.

use sqlx::PgPool;
use std::env;

/// Initializes the shared PostgreSQL connection pool.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set or the database is unreachable. This
/// runs once during startup, before the server accepts requests.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
