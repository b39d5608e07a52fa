//! Validation errors raised by course value objects.

use thiserror::Error;

/// Errors produced while constructing course value objects.
///
/// Each variant corresponds to exactly one invariant of one value object,
/// so callers can map failures to transport responses without inspecting
/// message strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseError {
    /// The supplied id is not a parseable UUID.
    #[error("invalid course id: {0}")]
    InvalidId(String),

    /// The course name is the empty string.
    #[error("the course name cannot be empty")]
    EmptyName,

    /// The course duration is the empty string.
    #[error("the course duration cannot be empty")]
    EmptyDuration,

    /// The duration is non-empty but names no recognized time unit.
    #[error("invalid course duration: {0}")]
    InvalidDuration(String),
}
