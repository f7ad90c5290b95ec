use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use crate::utils::errors::AppError;
use crate::utils::existence::{Entity, item_exists};

use super::model::{
    AccomplishedFilter, CreateStudentDto, SortOrder, Student, StudentFilterParams,
    StudentListResponse, StudentWithClasses, UpdateStudentDto,
};

/// Replaces a student's enrollment rows with exactly `class_ids`.
///
/// Delete-then-insert inside the caller's transaction: afterwards the join
/// rows for the student equal the requested set, with no leftovers and no
/// duplicates (repeated input ids collapse on the composite primary key).
/// Rolling back the transaction leaves the prior state intact.
pub async fn resync_enrollments(
    tx: &mut Transaction<'_, Postgres>,
    student_id: i32,
    class_ids: &[i32],
) -> Result<(), AppError> {
    sqlx::query("DELETE FROM student_classes WHERE student_id = $1")
        .bind(student_id)
        .execute(&mut **tx)
        .await?;

    if !class_ids.is_empty() {
        sqlx::query(
            "INSERT INTO student_classes (student_id, class_id)
             SELECT $1, unnest($2::int4[])
             ON CONFLICT DO NOTHING",
        )
        .bind(student_id)
        .bind(class_ids)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db))]
    pub async fn get_students(
        db: &PgPool,
        params: StudentFilterParams,
    ) -> Result<StudentListResponse, AppError> {
        let filters = params.parsed_filters();
        let limit = params.pagination.limit();
        let offset = params.pagination.offset();

        let total_count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students WHERE active = TRUE")
                .fetch_one(db)
                .await?;

        let mut sql = String::from(
            r#"SELECT
                s.id,
                s.name,
                s.joined_date,
                s.accomplished_classes,
                COALESCE(
                    JSON_AGG(JSON_BUILD_OBJECT('student_id', sc.student_id, 'class_id', sc.class_id))
                        FILTER (WHERE sc.student_id IS NOT NULL),
                    '[]'
                ) AS classes
               FROM students s
               LEFT JOIN student_classes sc ON sc.student_id = s.id
               WHERE s.active = TRUE"#,
        );

        let search_pattern = params.search.as_ref().map(|s| format!("%{}%", s));
        if search_pattern.is_some() {
            sql.push_str(" AND s.name ILIKE $1");
        }

        match filters.accomplished {
            Some(AccomplishedFilter::Accomplished) => {
                sql.push_str(" AND s.accomplished_classes > 0");
            }
            Some(AccomplishedFilter::Unaccomplished) => {
                sql.push_str(" AND s.accomplished_classes = 0");
            }
            None => {}
        }

        sql.push_str(" GROUP BY s.id");
        sql.push_str(match filters.sort {
            SortOrder::Oldest => " ORDER BY s.joined_date ASC",
            SortOrder::Recent => " ORDER BY s.joined_date DESC",
        });
        sql.push_str(&format!(" LIMIT {} OFFSET {}", limit, offset));

        let mut query = sqlx::query_as::<_, StudentWithClasses>(&sql);
        if let Some(pattern) = &search_pattern {
            query = query.bind(pattern);
        }
        let students = query.fetch_all(db).await?;

        Ok(StudentListResponse {
            success: true,
            message: "Students fetched successfully".to_string(),
            data: students,
            total_count,
        })
    }

    /// Inserts the student and their initial enrollment set as one unit.
    #[instrument(skip(db, dto))]
    pub async fn add_student(db: &PgPool, dto: CreateStudentDto) -> Result<Student, AppError> {
        let mut tx = db.begin().await?;

        let student = sqlx::query_as::<_, Student>(
            r#"INSERT INTO students (name, joined_date, accomplished_classes)
               VALUES ($1, $2, 0)
               RETURNING id, name, joined_date, accomplished_classes, active"#,
        )
        .bind(&dto.name)
        .bind(dto.joined_date)
        .fetch_one(&mut *tx)
        .await?;

        resync_enrollments(&mut tx, student.id, &dto.class_ids).await?;

        tx.commit().await?;

        Ok(student)
    }

    /// Updates the provided fields and replaces the enrollment set, all in
    /// one transaction.
    #[instrument(skip(db, dto))]
    pub async fn edit_student(
        db: &PgPool,
        id: i32,
        dto: UpdateStudentDto,
    ) -> Result<Student, AppError> {
        if !item_exists(db, Entity::Student, id).await? {
            return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
        }

        let mut tx = db.begin().await?;

        let student = sqlx::query_as::<_, Student>(
            r#"UPDATE students
               SET name = COALESCE($1, name),
                   joined_date = COALESCE($2, joined_date),
                   accomplished_classes = COALESCE($3, accomplished_classes)
               WHERE id = $4
               RETURNING id, name, joined_date, accomplished_classes, active"#,
        )
        .bind(&dto.name)
        .bind(dto.joined_date)
        .bind(dto.accomplished_classes)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        resync_enrollments(&mut tx, id, &dto.class_ids).await?;

        tx.commit().await?;

        Ok(student)
    }

    /// Soft delete: flips `active` off, enrollment rows stay behind.
    #[instrument(skip(db))]
    pub async fn delete_student(db: &PgPool, id: i32) -> Result<(), AppError> {
        if !item_exists(db, Entity::Student, id).await? {
            return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
        }

        sqlx::query("UPDATE students SET active = FALSE WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        Ok(())
    }
}
