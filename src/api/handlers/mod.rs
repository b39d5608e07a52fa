//! HTTP request handlers for API endpoints.

pub mod courses;
pub mod health;

pub use courses::{create_course_handler, get_course_handler, list_courses_handler};
pub use health::health_handler;
