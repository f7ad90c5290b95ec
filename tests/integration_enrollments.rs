mod common;

use chrono::NaiveDate;
use sqlx::PgPool;

use common::{create_test_classes, create_test_student, enrollment_ids};
use sims_api::modules::students::model::{CreateStudentDto, UpdateStudentDto};
use sims_api::modules::students::service::{StudentService, resync_enrollments};

async fn resync(pool: &PgPool, student_id: i32, class_ids: &[i32]) {
    let mut tx = pool.begin().await.unwrap();
    resync_enrollments(&mut tx, student_id, class_ids).await.unwrap();
    tx.commit().await.unwrap();
}

#[sqlx::test(migrations = "./migrations")]
async fn test_resync_replaces_overlapping_set(pool: PgPool) {
    let classes = create_test_classes(&pool, 4).await;
    let student_id = create_test_student(&pool, "Ada").await;

    let set_a = vec![classes[0], classes[1], classes[2]];
    let set_b = vec![classes[1], classes[3]];

    resync(&pool, student_id, &set_a).await;
    resync(&pool, student_id, &set_b).await;

    let mut expected = set_b.clone();
    expected.sort();
    assert_eq!(enrollment_ids(&pool, student_id).await, expected);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_resync_replaces_disjoint_set(pool: PgPool) {
    let classes = create_test_classes(&pool, 4).await;
    let student_id = create_test_student(&pool, "Ada").await;

    resync(&pool, student_id, &classes[..2]).await;
    resync(&pool, student_id, &classes[2..]).await;

    let mut expected = classes[2..].to_vec();
    expected.sort();
    assert_eq!(enrollment_ids(&pool, student_id).await, expected);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_resync_with_empty_set_clears_enrollments(pool: PgPool) {
    let classes = create_test_classes(&pool, 2).await;
    let student_id = create_test_student(&pool, "Ada").await;

    resync(&pool, student_id, &classes).await;
    resync(&pool, student_id, &[]).await;

    assert!(enrollment_ids(&pool, student_id).await.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_resync_collapses_duplicate_input_ids(pool: PgPool) {
    let classes = create_test_classes(&pool, 1).await;
    let student_id = create_test_student(&pool, "Ada").await;

    resync(&pool, student_id, &[classes[0], classes[0], classes[0]]).await;

    assert_eq!(enrollment_ids(&pool, student_id).await, vec![classes[0]]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_add_student_creates_enrollments(pool: PgPool) {
    let classes = create_test_classes(&pool, 2).await;

    let student = StudentService::add_student(
        &pool,
        CreateStudentDto {
            name: "Grace".to_string(),
            joined_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            class_ids: classes.clone(),
        },
    )
    .await
    .unwrap();

    assert_eq!(student.name, "Grace");
    assert_eq!(student.accomplished_classes, 0);
    assert!(student.active);

    let mut expected = classes;
    expected.sort();
    assert_eq!(enrollment_ids(&pool, student.id).await, expected);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_add_student_rolls_back_on_unknown_class(pool: PgPool) {
    let result = StudentService::add_student(
        &pool,
        CreateStudentDto {
            name: "Grace".to_string(),
            joined_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            class_ids: vec![999999],
        },
    )
    .await;

    assert!(result.is_err());

    // The whole unit aborts: no student row survives the failed insert.
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_edit_student_updates_fields_and_resyncs(pool: PgPool) {
    let classes = create_test_classes(&pool, 3).await;
    let student_id = create_test_student(&pool, "Ada").await;
    resync(&pool, student_id, &classes[..2]).await;

    let student = StudentService::edit_student(
        &pool,
        student_id,
        UpdateStudentDto {
            name: Some("Ada Lovelace".to_string()),
            joined_date: None,
            accomplished_classes: Some(2),
            class_ids: vec![classes[2]],
        },
    )
    .await
    .unwrap();

    assert_eq!(student.name, "Ada Lovelace");
    assert_eq!(student.accomplished_classes, 2);
    // Unchanged field kept its value.
    assert_eq!(
        student.joined_date,
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    );
    assert_eq!(enrollment_ids(&pool, student_id).await, vec![classes[2]]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_edit_unknown_student_is_not_found(pool: PgPool) {
    let result = StudentService::edit_student(
        &pool,
        424242,
        UpdateStudentDto {
            name: None,
            joined_date: None,
            accomplished_classes: None,
            class_ids: vec![],
        },
    )
    .await;

    let err = result.unwrap_err();
    assert_eq!(err.status, axum::http::StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_student_is_soft(pool: PgPool) {
    let student_id = create_test_student(&pool, "Ada").await;

    StudentService::delete_student(&pool, student_id).await.unwrap();

    let active = sqlx::query_scalar::<_, bool>("SELECT active FROM students WHERE id = $1")
        .bind(student_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(!active);
}
