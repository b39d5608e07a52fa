use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::CourseError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// HTTP-facing application error.
///
/// The single translation point from failure kind to status code:
/// validation → 400, unacceptable duration → 406, missing resource → 404,
/// persistence failure → 500.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotAcceptable { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_acceptable(message: impl Into<String>, details: Value) -> Self {
        Self::NotAcceptable {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotAcceptable { message, details } => (
                StatusCode::NOT_ACCEPTABLE,
                "not_acceptable",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Maps domain validation failures to their transport status.
///
/// An unrecognized duration unit is the one validation failure contracted
/// to 406 Not Acceptable; every other one is a plain 400.
impl From<CourseError> for AppError {
    fn from(err: CourseError) -> Self {
        match err {
            CourseError::InvalidDuration(ref duration) => {
                AppError::not_acceptable(err.to_string(), json!({ "duration": duration }))
            }
            CourseError::InvalidId(ref id) => {
                AppError::bad_request(err.to_string(), json!({ "id": id }))
            }
            CourseError::EmptyName | CourseError::EmptyDuration => {
                AppError::bad_request(err.to_string(), json!({}))
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal("Database error", json!({ "cause": e.to_string() }))
    }
}
