pub mod auth;
pub mod classes;
pub mod dashboard;
pub mod students;
