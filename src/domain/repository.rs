//! Repository trait for course data access.

use async_trait::async_trait;

use crate::domain::course::{Course, CourseId};
use crate::error::AppError;

/// Repository interface for persisting and retrieving courses.
///
/// Defines the storage contract independently of the backing technology.
/// Implementations must reconstruct rows through [`Course::new`] so that
/// stored data violating value-object invariants surfaces as an error
/// rather than a silently invalid course.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCourseRepository`] - PostgreSQL implementation
/// - Hand-rolled stubs in `tests/common` for handler tests
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Persists a new course record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store rejects the write.
    async fn save(&self, course: &Course) -> Result<(), AppError>;

    /// Returns all stored courses in storage-native order.
    ///
    /// An empty result set is a valid, non-error outcome.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database or reconstruction errors.
    async fn get_all(&self) -> Result<Vec<Course>, AppError>;

    /// Finds a course by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Course))` if found
    /// - `Ok(None)` if no row matches
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database or reconstruction errors.
    async fn get_by_id(&self, id: &CourseId) -> Result<Option<Course>, AppError>;
}
