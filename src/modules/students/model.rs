use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::utils::pagination::PaginationParams;

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub joined_date: NaiveDate,
    pub accomplished_classes: i32,
    pub active: bool,
}

/// One enrollment join row linking a student to a class.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentLink {
    pub student_id: i32,
    pub class_id: i32,
}

/// Student row with its enrollments aggregated by the list query.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct StudentWithClasses {
    pub id: i32,
    pub name: String,
    pub joined_date: NaiveDate,
    pub accomplished_classes: i32,
    #[schema(value_type = Vec<EnrollmentLink>)]
    pub classes: sqlx::types::Json<Vec<EnrollmentLink>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub joined_date: NaiveDate,
    #[validate(length(min = 1, message = "class_ids must be a non-empty array"))]
    pub class_ids: Vec<i32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub joined_date: Option<NaiveDate>,
    #[validate(range(min = 0, message = "accomplished_classes must be >= 0"))]
    pub accomplished_classes: Option<i32>,
    /// Full target enrollment set; an empty list clears all enrollments.
    pub class_ids: Vec<i32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ClassIdsRequest {
    #[validate(length(min = 1, message = "class_ids must be a non-empty array"))]
    pub class_ids: Vec<i32>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct StudentFilterParams {
    /// Substring match on the student name.
    pub search: Option<String>,
    /// Comma-separated flags: accomplished, unaccomplished, oldest, recent.
    pub filter: Option<String>,
    #[serde(flatten)]
    #[param(inline)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccomplishedFilter {
    Accomplished,
    Unaccomplished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Oldest,
    Recent,
}

#[derive(Debug, Clone, Copy)]
pub struct StudentFilters {
    pub accomplished: Option<AccomplishedFilter>,
    pub sort: SortOrder,
}

impl StudentFilterParams {
    /// Parses the comma-separated `filter` value. Unknown flags are ignored;
    /// `accomplished` wins over `unaccomplished` when both are present.
    pub fn parsed_filters(&self) -> StudentFilters {
        let flags: Vec<&str> = self
            .filter
            .as_deref()
            .map(|f| f.split(',').map(str::trim).collect())
            .unwrap_or_default();

        let accomplished = if flags.contains(&"accomplished") {
            Some(AccomplishedFilter::Accomplished)
        } else if flags.contains(&"unaccomplished") {
            Some(AccomplishedFilter::Unaccomplished)
        } else {
            None
        };

        let sort = if flags.contains(&"oldest") {
            SortOrder::Oldest
        } else {
            SortOrder::Recent
        };

        StudentFilters { accomplished, sort }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentListResponse {
    pub success: bool,
    pub message: String,
    pub data: Vec<StudentWithClasses>,
    pub total_count: i64,
}
