use std::collections::BTreeMap;

use chrono::{Months, Utc};
use sqlx::PgPool;
use tracing::instrument;

use crate::modules::classes::model::ClassType;
use crate::utils::errors::AppError;

use super::model::{ChartData, HeaderCards, MonthlyRevenue, RevenueByType, RunningClass, TeacherEntry};

pub struct DashboardService;

impl DashboardService {
    #[instrument(skip(db))]
    pub async fn header_cards(db: &PgPool) -> Result<HeaderCards, AppError> {
        let total_students_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
            .fetch_one(db)
            .await?;
        let total_classes_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM classes")
            .fetch_one(db)
            .await?;
        let completed_classes =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM classes WHERE done = TRUE")
                .fetch_one(db)
                .await?;
        let completed_students = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM students WHERE accomplished_classes > 0",
        )
        .fetch_one(db)
        .await?;

        Ok(HeaderCards {
            total_students_count,
            total_classes_count,
            completed_classes,
            completed_students,
        })
    }

    #[instrument(skip(db))]
    pub async fn chart_data(db: &PgPool) -> Result<ChartData, AppError> {
        let running_classes = sqlx::query_as::<_, RunningClass>(
            r#"SELECT c.id, c.teacher, c.name, c.image, COUNT(sc.class_id) AS student_count
               FROM classes c
               LEFT JOIN student_classes sc ON sc.class_id = c.id
               WHERE c.done = FALSE
               GROUP BY c.id"#,
        )
        .fetch_all(db)
        .await?;

        #[derive(sqlx::FromRow)]
        struct TypeRevenueRow {
            #[sqlx(rename = "type")]
            class_type: ClassType,
            total_revenue: i64,
        }

        let revenue_rows = sqlx::query_as::<_, TypeRevenueRow>(
            r#"SELECT c.type, COALESCE(SUM(c.price), 0) AS total_revenue
               FROM student_classes sc
               JOIN classes c ON c.id = sc.class_id
               WHERE c.done = FALSE
               GROUP BY c.type"#,
        )
        .fetch_all(db)
        .await?;

        let mut revenues = RevenueByType {
            frontend_revenue: 0,
            backend_revenue: 0,
            mobile_revenue: 0,
        };
        for row in revenue_rows {
            match row.class_type {
                ClassType::Frontend => revenues.frontend_revenue = row.total_revenue,
                ClassType::Backend => revenues.backend_revenue = row.total_revenue,
                ClassType::Mobile => revenues.mobile_revenue = row.total_revenue,
            }
        }

        #[derive(sqlx::FromRow)]
        struct ClassRevenueRow {
            month: String,
            #[sqlx(rename = "type")]
            class_type: ClassType,
            class_revenue: i64,
        }

        // Revenue per class, keyed by the month the class starts. Classes
        // with no students contribute zero.
        let per_class = sqlx::query_as::<_, ClassRevenueRow>(
            r#"SELECT
                TO_CHAR(c.start_date, 'YYYY-MM') AS month,
                c.type,
                c.price * COUNT(sc.student_id) AS class_revenue
               FROM classes c
               LEFT JOIN student_classes sc ON sc.class_id = c.id
               WHERE c.done = FALSE
               GROUP BY c.id"#,
        )
        .fetch_all(db)
        .await?;

        let mut by_month: BTreeMap<String, (i64, i64, i64)> = BTreeMap::new();
        for row in per_class {
            let entry = by_month.entry(row.month).or_default();
            match row.class_type {
                ClassType::Frontend => entry.0 += row.class_revenue,
                ClassType::Backend => entry.1 += row.class_revenue,
                ClassType::Mobile => entry.2 += row.class_revenue,
            }
        }

        // Pivot over the next six months starting from today; months with no
        // starting classes stay at zero.
        let today = Utc::now().date_naive();
        let revenues_by_month = (0..6)
            .filter_map(|i| today.checked_add_months(Months::new(i)))
            .map(|date| {
                let key = date.format("%Y-%m").to_string();
                let (frontend, backend, mobile) = by_month.get(&key).copied().unwrap_or_default();
                MonthlyRevenue {
                    month: date.format("%B").to_string(),
                    frontend,
                    backend,
                    mobile,
                }
            })
            .collect();

        let teachers = sqlx::query_as::<_, TeacherEntry>(
            "SELECT DISTINCT teacher, type FROM classes",
        )
        .fetch_all(db)
        .await?;

        Ok(ChartData {
            running_classes,
            revenues,
            revenues_by_month,
            teachers,
        })
    }
}
