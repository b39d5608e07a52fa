//! DTOs for the course endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::Course;

/// Request body for `POST /courses`.
///
/// All three fields are required at the transport layer; an absent field is
/// a decode rejection before domain validation runs.
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub id: String,
    pub name: String,
    pub duration: String,
}

/// JSON representation of a course.
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: String,
    pub name: String,
    pub duration: String,
}

impl From<&Course> for CourseResponse {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id().to_string(),
            name: course.name().to_string(),
            duration: course.duration().to_string(),
        }
    }
}
