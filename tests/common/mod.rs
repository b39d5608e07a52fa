#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use courses_api::domain::{Course, CourseId, CourseRepository};
use courses_api::error::AppError;
use courses_api::state::AppState;

pub const DEMO_ID: &str = "8a1c5cdc-ba57-445a-994d-aa412d23723f";

/// Hand-rolled repository stub with canned per-test outcomes.
///
/// `courses` seeds the rows returned by reads; the `fail_*` flags turn the
/// corresponding operation into a persistence failure. Saved courses are
/// recorded so tests can assert on what reached the repository.
#[derive(Default)]
pub struct StubCourseRepository {
    pub courses: Vec<Course>,
    pub fail_save: bool,
    pub fail_get_all: bool,
    pub fail_get_by_id: bool,
    pub saved: Mutex<Vec<Course>>,
}

impl StubCourseRepository {
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_save: true,
            fail_get_all: true,
            fail_get_by_id: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl CourseRepository for StubCourseRepository {
    async fn save(&self, course: &Course) -> Result<(), AppError> {
        if self.fail_save {
            return Err(AppError::internal("error to save", json!({})));
        }
        self.saved.lock().unwrap().push(course.clone());
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Course>, AppError> {
        if self.fail_get_all {
            return Err(AppError::internal("error", json!({})));
        }
        Ok(self.courses.clone())
    }

    async fn get_by_id(&self, id: &CourseId) -> Result<Option<Course>, AppError> {
        if self.fail_get_by_id {
            return Err(AppError::internal("error", json!({})));
        }
        Ok(self.courses.iter().find(|c| c.id() == id).cloned())
    }
}

pub fn test_state(repository: Arc<StubCourseRepository>) -> AppState {
    AppState::new(repository)
}

pub fn demo_course() -> Course {
    Course::new(DEMO_ID, "Demo Course", "10 months").unwrap()
}
