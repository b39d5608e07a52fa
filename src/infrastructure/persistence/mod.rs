//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgCourseRepository`] - Course storage and retrieval

pub mod pg_course_repository;

pub use pg_course_repository::PgCourseRepository;
