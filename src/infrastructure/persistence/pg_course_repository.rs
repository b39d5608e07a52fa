//! PostgreSQL implementation of the course repository.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::course::{Course, CourseId};
use crate::domain::repository::CourseRepository;
use crate::error::AppError;

/// Row shape scanned from the `courses` table.
#[derive(Debug, FromRow)]
struct CourseRow {
    id: Uuid,
    name: String,
    duration: String,
}

impl CourseRow {
    /// Rebuilds the domain aggregate from a stored row.
    ///
    /// Rows go back through [`Course::new`], so stored data that no longer
    /// satisfies the value-object invariants surfaces as an error instead
    /// of leaking an invalid course.
    fn into_course(self) -> Result<Course, AppError> {
        Course::new(&self.id.to_string(), &self.name, &self.duration).map_err(|e| {
            AppError::internal(
                "Stored course failed validation",
                json!({ "id": self.id.to_string(), "cause": e.to_string() }),
            )
        })
    }
}

/// PostgreSQL repository for course storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection.
pub struct PgCourseRepository {
    pool: Arc<PgPool>,
}

impl PgCourseRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn save(&self, course: &Course) -> Result<(), AppError> {
        sqlx::query("INSERT INTO courses (id, name, duration) VALUES ($1, $2, $3)")
            .bind(course.id().as_uuid())
            .bind(course.name().as_str())
            .bind(course.duration().as_str())
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Course>, AppError> {
        let rows: Vec<CourseRow> = sqlx::query_as("SELECT id, name, duration FROM courses")
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.into_iter().map(CourseRow::into_course).collect()
    }

    async fn get_by_id(&self, id: &CourseId) -> Result<Option<Course>, AppError> {
        let row: Option<CourseRow> =
            sqlx::query_as("SELECT id, name, duration FROM courses WHERE id = $1")
                .bind(id.as_uuid())
                .fetch_optional(self.pool.as_ref())
                .await?;

        row.map(CourseRow::into_course).transpose()
    }
}
