use std::sync::Arc;

use crate::domain::CourseRepository;

/// Shared application state injected into all handlers.
///
/// Holds the storage abstraction behind a trait object so handler tests can
/// substitute a stub repository without touching a database.
#[derive(Clone)]
pub struct AppState {
    pub course_repository: Arc<dyn CourseRepository>,
}

impl AppState {
    pub fn new(course_repository: Arc<dyn CourseRepository>) -> Self {
        Self { course_repository }
    }
}
