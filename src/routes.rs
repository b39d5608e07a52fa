//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /courses`       - Create a course
//! - `GET  /courses`       - List all courses
//! - `GET  /courses/{id}`  - Fetch a single course
//! - `GET  /health`        - Liveness probe
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use axum::{
    Router,
    routing::{get, post},
};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{
    create_course_handler, get_course_handler, health_handler, list_courses_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route(
            "/courses",
            post(create_course_handler).get(list_courses_handler),
        )
        .route("/courses/{id}", get(get_course_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
