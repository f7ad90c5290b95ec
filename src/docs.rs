use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::model::{LoginRequest, UserSummary};
use crate::modules::classes::model::{
    Class, ClassListResponse, ClassType, CreateClassDto, UpdateClassDto,
};
use crate::modules::dashboard::model::{
    ChartData, HeaderCards, MonthlyRevenue, RevenueByType, RunningClass, TeacherEntry,
};
use crate::modules::students::model::{
    ClassIdsRequest, CreateStudentDto, EnrollmentLink, Student, StudentListResponse,
    StudentWithClasses, UpdateStudentDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::logout,
        crate::modules::auth::controller::refresh_token,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::add_student,
        crate::modules::students::controller::edit_student,
        crate::modules::students::controller::delete_student,
        crate::modules::students::controller::get_classes_for_student,
        crate::modules::classes::controller::get_classes,
        crate::modules::classes::controller::add_class,
        crate::modules::classes::controller::edit_class,
        crate::modules::classes::controller::delete_class,
        crate::modules::dashboard::controller::header_cards,
        crate::modules::dashboard::controller::chart_data,
    ),
    components(
        schemas(
            LoginRequest,
            UserSummary,
            Student,
            StudentWithClasses,
            EnrollmentLink,
            CreateStudentDto,
            UpdateStudentDto,
            ClassIdsRequest,
            StudentListResponse,
            Class,
            ClassType,
            CreateClassDto,
            UpdateClassDto,
            ClassListResponse,
            HeaderCards,
            ChartData,
            RunningClass,
            RevenueByType,
            MonthlyRevenue,
            TeacherEntry,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login, logout and token refresh"),
        (name = "Students", description = "Student and enrollment management"),
        (name = "Classes", description = "Class management"),
        (name = "Dashboard", description = "Aggregate statistics")
    ),
    info(
        title = "SIMS API",
        version = "0.1.0",
        description = "Student information management backend: JWT authentication, students, classes, enrollments and dashboard aggregates.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
