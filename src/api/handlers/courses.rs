//! Handlers for the course endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::course::{CourseResponse, CreateCourseRequest};
use crate::domain::{Course, CourseId};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new course.
///
/// # Endpoint
///
/// `POST /courses`
///
/// # Request Body
///
/// ```json
/// {
///   "id": "8a1c5cdc-ba57-445a-994d-aa412d23723f",
///   "name": "Demo Course",
///   "duration": "10 months"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request on a malformed body or any validation failure other
///   than an unrecognized duration unit
/// - 406 Not Acceptable when the duration is present but names no
///   recognized time unit
/// - 500 Internal Server Error when the repository rejects the save
pub async fn create_course_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateCourseRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    // Decode rejections (missing field, invalid JSON) are a transport-level
    // 400, never a 422 and never a domain validation error.
    let Json(payload) = payload
        .map_err(|rejection| AppError::bad_request(rejection.body_text(), json!({})))?;

    let course = Course::new(&payload.id, &payload.name, &payload.duration)?;

    state.course_repository.save(&course).await?;

    Ok(StatusCode::CREATED)
}

/// Lists all stored courses.
///
/// # Endpoint
///
/// `GET /courses`
///
/// Returns a JSON array, possibly empty.
///
/// # Errors
///
/// Returns 500 Internal Server Error on repository failure.
pub async fn list_courses_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let courses = state.course_repository.get_all().await?;

    Ok(Json(courses.iter().map(CourseResponse::from).collect()))
}

/// Returns a single course by id.
///
/// # Endpoint
///
/// `GET /courses/{id}`
///
/// # Errors
///
/// - 400 Bad Request when the path id fails UUID validation; the
///   repository is not consulted
/// - 404 Not Found when no course matches
/// - 500 Internal Server Error on repository failure
pub async fn get_course_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<CourseResponse>, AppError> {
    let id = CourseId::new(&id)?;

    match state.course_repository.get_by_id(&id).await? {
        Some(course) => Ok(Json(CourseResponse::from(&course))),
        None => Err(AppError::not_found(
            "Course not found",
            json!({ "id": id.to_string() }),
        )),
    }
}
