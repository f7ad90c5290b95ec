//! Row-exists precondition check, shared by every mutation endpoint.

use sqlx::PgPool;

use crate::utils::errors::AppError;

/// The collections a row can be looked up in. Table names are fixed here so
/// the query string is never built from request input.
#[derive(Debug, Clone, Copy)]
pub enum Entity {
    Student,
    Class,
    User,
}

impl Entity {
    fn table(self) -> &'static str {
        match self {
            Entity::Student => "students",
            Entity::Class => "classes",
            Entity::User => "users",
        }
    }
}

/// Returns whether a row with `id` exists in the given collection.
///
/// Soft-deleted rows still count as existing; callers that care about the
/// `active` flag filter on it themselves.
pub async fn item_exists(db: &PgPool, entity: Entity, id: i32) -> Result<bool, AppError> {
    let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", entity.table());

    let exists = sqlx::query_scalar::<_, bool>(&sql)
        .bind(id)
        .fetch_one(db)
        .await?;

    Ok(exists)
}
