use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;
use crate::utils::existence::{Entity, item_exists};

use super::model::{Class, ClassFilterParams, ClassListResponse, CreateClassDto, UpdateClassDto};

const CLASS_COLUMNS: &str =
    "id, name, teacher, image, price, type, done, active, start_date, end_date";

pub struct ClassService;

impl ClassService {
    #[instrument(skip(db, dto))]
    pub async fn add_class(db: &PgPool, dto: CreateClassDto) -> Result<Class, AppError> {
        let class = sqlx::query_as::<_, Class>(&format!(
            r#"INSERT INTO classes (name, teacher, image, price, type, done, start_date, end_date)
               VALUES ($1, $2, $3, $4, $5, FALSE, $6, $7)
               RETURNING {CLASS_COLUMNS}"#
        ))
        .bind(&dto.name)
        .bind(&dto.teacher)
        .bind(&dto.image)
        .bind(dto.price)
        .bind(dto.class_type)
        .bind(dto.start_date)
        .bind(dto.end_date)
        .fetch_one(db)
        .await?;

        Ok(class)
    }

    #[instrument(skip(db))]
    pub async fn get_classes(
        db: &PgPool,
        params: ClassFilterParams,
    ) -> Result<ClassListResponse, AppError> {
        let filters = params.parsed_filters();
        let limit = params.pagination.limit();
        let page = params.pagination.page();
        let offset = params.pagination.offset();

        let total_count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM classes WHERE active = TRUE")
                .fetch_one(db)
                .await?;

        let mut sql = format!("SELECT {CLASS_COLUMNS} FROM classes WHERE active = TRUE");
        let mut n = 0;

        let search_pattern = params.search.as_ref().map(|s| format!("%{}%", s));
        if search_pattern.is_some() {
            n += 1;
            sql.push_str(&format!(" AND name ILIKE ${n}"));
        }
        if filters.done.is_some() {
            n += 1;
            sql.push_str(&format!(" AND done = ${n}"));
        }
        if !filters.types.is_empty() {
            n += 1;
            sql.push_str(&format!(" AND type::text = ANY(${n})"));
        }
        sql.push_str(" ORDER BY id DESC");
        sql.push_str(&format!(" LIMIT {} OFFSET {}", limit, offset));

        let mut query = sqlx::query_as::<_, Class>(&sql);
        if let Some(pattern) = &search_pattern {
            query = query.bind(pattern);
        }
        if let Some(done) = filters.done {
            query = query.bind(done);
        }
        if !filters.types.is_empty() {
            query = query.bind(&filters.types);
        }
        let classes = query.fetch_all(db).await?;

        Ok(ClassListResponse {
            success: true,
            message: "Classes fetched successfully".to_string(),
            page,
            limit,
            total_count,
            data: classes,
        })
    }

    /// Fetches the classes matching the given ids, regardless of order.
    #[instrument(skip(db))]
    pub async fn get_classes_by_ids(db: &PgPool, class_ids: &[i32]) -> Result<Vec<Class>, AppError> {
        let classes = sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE id = ANY($1)"
        ))
        .bind(class_ids)
        .fetch_all(db)
        .await?;

        Ok(classes)
    }

    #[instrument(skip(db, dto))]
    pub async fn edit_class(db: &PgPool, id: i32, dto: UpdateClassDto) -> Result<Class, AppError> {
        if !item_exists(db, Entity::Class, id).await? {
            return Err(AppError::not_found(anyhow::anyhow!("Class not found")));
        }

        let class = sqlx::query_as::<_, Class>(&format!(
            r#"UPDATE classes
               SET name = COALESCE($1, name),
                   teacher = COALESCE($2, teacher),
                   price = COALESCE($3, price),
                   start_date = COALESCE($4, start_date),
                   end_date = COALESCE($5, end_date),
                   done = COALESCE($6, done)
               WHERE id = $7
               RETURNING {CLASS_COLUMNS}"#
        ))
        .bind(&dto.name)
        .bind(&dto.teacher)
        .bind(dto.price)
        .bind(dto.start_date)
        .bind(dto.end_date)
        .bind(dto.done)
        .bind(id)
        .fetch_one(db)
        .await?;

        Ok(class)
    }

    /// Soft delete: the class disappears from listings but keeps its history.
    #[instrument(skip(db))]
    pub async fn delete_class(db: &PgPool, id: i32) -> Result<Class, AppError> {
        if !item_exists(db, Entity::Class, id).await? {
            return Err(AppError::not_found(anyhow::anyhow!("Class not found")));
        }

        let class = sqlx::query_as::<_, Class>(&format!(
            "UPDATE classes SET active = FALSE WHERE id = $1 RETURNING {CLASS_COLUMNS}"
        ))
        .bind(id)
        .fetch_one(db)
        .await?;

        Ok(class)
    }
}
