use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::modules::classes::model::ClassType;

#[derive(Debug, Serialize, ToSchema)]
pub struct HeaderCards {
    pub total_students_count: i64,
    pub total_classes_count: i64,
    pub completed_classes: i64,
    pub completed_students: i64,
}

/// A not-yet-finished class with how many students are enrolled in it.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct RunningClass {
    pub id: i32,
    pub teacher: String,
    pub name: String,
    pub image: String,
    pub student_count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RevenueByType {
    pub frontend_revenue: i64,
    pub backend_revenue: i64,
    pub mobile_revenue: i64,
}

/// Projected revenue for one calendar month, pivoted per class type.
#[derive(Debug, Serialize, ToSchema)]
pub struct MonthlyRevenue {
    pub month: String,
    pub frontend: i64,
    pub backend: i64,
    pub mobile: i64,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct TeacherEntry {
    pub teacher: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub class_type: ClassType,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChartData {
    pub running_classes: Vec<RunningClass>,
    pub revenues: RevenueByType,
    pub revenues_by_month: Vec<MonthlyRevenue>,
    pub teachers: Vec<TeacherEntry>,
}
