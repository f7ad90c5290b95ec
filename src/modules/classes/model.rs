use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::utils::pagination::PaginationParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "class_type", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ClassType {
    Frontend,
    Backend,
    Mobile,
}

impl ClassType {
    pub fn as_str(self) -> &'static str {
        match self {
            ClassType::Frontend => "FRONTEND",
            ClassType::Backend => "BACKEND",
            ClassType::Mobile => "MOBILE",
        }
    }
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Class {
    pub id: i32,
    pub name: String,
    pub teacher: String,
    pub image: String,
    pub price: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub class_type: ClassType,
    pub done: bool,
    pub active: bool,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClassDto {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "teacher is required"))]
    pub teacher: String,
    #[validate(length(min = 1, message = "image is required"))]
    pub image: String,
    #[validate(range(min = 0, message = "price must be >= 0"))]
    pub price: i32,
    #[serde(rename = "type")]
    pub class_type: ClassType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateClassDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "teacher must not be empty"))]
    pub teacher: Option<String>,
    #[validate(range(min = 0, message = "price must be >= 0"))]
    pub price: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub done: Option<bool>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ClassFilterParams {
    /// Substring match on the class name.
    pub search: Option<String>,
    /// Comma-separated flags: done, notDone, and/or type names
    /// (FRONTEND, BACKEND, MOBILE).
    pub filter: Option<String>,
    #[serde(flatten)]
    #[param(inline)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Clone)]
pub struct ClassFilters {
    /// Set only when exactly one of done/notDone is requested; both at once
    /// cancel out and show everything.
    pub done: Option<bool>,
    pub types: Vec<String>,
}

impl ClassFilterParams {
    pub fn parsed_filters(&self) -> ClassFilters {
        let flags: Vec<&str> = self
            .filter
            .as_deref()
            .map(|f| f.split(',').map(str::trim).collect())
            .unwrap_or_default();

        let done_flags: Vec<&&str> = flags
            .iter()
            .filter(|f| **f == "done" || **f == "notDone")
            .collect();
        let done = if done_flags.len() == 1 {
            Some(*done_flags[0] == "done")
        } else {
            None
        };

        let types = flags
            .iter()
            .filter(|f| ["FRONTEND", "BACKEND", "MOBILE"].contains(*f))
            .map(|f| f.to_string())
            .collect();

        ClassFilters { done, types }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClassListResponse {
    pub success: bool,
    pub message: String,
    pub page: i64,
    pub limit: i64,
    pub total_count: i64,
    pub data: Vec<Class>,
}
