use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use sims_api::config::cors::CorsConfig;
use sims_api::config::jwt::JwtConfig;
use sims_api::state::AppState;
use sims_api::utils::password::hash_password;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        access_secret: "test-access-secret".to_string(),
        refresh_secret: "test-refresh-secret".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 604800,
    }
}

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    let state = AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig::from_env(),
    };
    sims_api::router::init_router(state)
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Inserts a user the way out-of-scope provisioning would.
#[allow(dead_code)]
pub async fn create_test_user(pool: &PgPool, name: &str, password: &str) -> TestUser {
    let email = format!("test-{}@test.com", Uuid::new_v4());
    let code = Uuid::new_v4().to_string();
    let hashed = hash_password(password).unwrap();

    let id = sqlx::query_scalar::<_, i32>(
        r#"INSERT INTO users (name, role, code, email, password)
           VALUES ($1, 'admin', $2, $3, $4)
           RETURNING id"#,
    )
    .bind(name)
    .bind(&code)
    .bind(&email)
    .bind(&hashed)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        name: name.to_string(),
        email,
        password: password.to_string(),
    }
}

#[allow(dead_code)]
pub async fn create_test_student(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO students (name, joined_date) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts `count` classes and returns their ids.
#[allow(dead_code)]
pub async fn create_test_classes(pool: &PgPool, count: usize) -> Vec<i32> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let id = sqlx::query_scalar::<_, i32>(
            r#"INSERT INTO classes (name, teacher, image, price, type, start_date, end_date)
               VALUES ($1, 'Test Teacher', 'test.png', 100, 'FRONTEND', $2, $3)
               RETURNING id"#,
        )
        .bind(format!("Test Class {i}"))
        .bind(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap())
        .bind(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap())
        .fetch_one(pool)
        .await
        .unwrap();
        ids.push(id);
    }
    ids
}

/// The enrollment class ids currently stored for a student, sorted.
#[allow(dead_code)]
pub async fn enrollment_ids(pool: &PgPool, student_id: i32) -> Vec<i32> {
    sqlx::query_scalar::<_, i32>(
        "SELECT class_id FROM student_classes WHERE student_id = $1 ORDER BY class_id",
    )
    .bind(student_id)
    .fetch_all(pool)
    .await
    .unwrap()
}
