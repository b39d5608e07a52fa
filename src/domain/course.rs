//! Course aggregate and its value objects.
//!
//! All three value objects validate on construction, so a [`Course`] that
//! exists is valid by construction and immutable afterwards.

use std::fmt;

use uuid::Uuid;

use crate::domain::error::CourseError;

/// Time-unit tokens recognized inside a duration value.
///
/// Matching is case-insensitive substring containment anywhere in the
/// value, not an exact match. Kept deliberately loose for compatibility
/// with existing stored data.
const DURATION_UNITS: [&str; 12] = [
    "minute", "minutes", "hour", "hours", "day", "days", "week", "weeks", "month", "months",
    "year", "years",
];

/// Unique course identifier backed by a UUID.
///
/// Accepts any textual UUID form on construction; renders in the canonical
/// lowercase hyphenated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CourseId(Uuid);

impl CourseId {
    /// Parses a course id from its textual form.
    ///
    /// # Errors
    ///
    /// Returns [`CourseError::InvalidId`] if `raw` is not a valid UUID.
    pub fn new(raw: &str) -> Result<Self, CourseError> {
        let id = Uuid::parse_str(raw).map_err(|_| CourseError::InvalidId(raw.to_string()))?;
        Ok(Self(id))
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty course name. Stored exactly as supplied, no trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseName(String);

impl CourseName {
    /// # Errors
    ///
    /// Returns [`CourseError::EmptyName`] if `raw` is empty.
    pub fn new(raw: impl Into<String>) -> Result<Self, CourseError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(CourseError::EmptyName);
        }
        Ok(Self(raw))
    }

    /// Returns the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-form course duration that must mention a recognized time unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDuration(String);

impl CourseDuration {
    /// # Errors
    ///
    /// Returns [`CourseError::EmptyDuration`] if `raw` is empty, or
    /// [`CourseError::InvalidDuration`] if it names no recognized unit.
    pub fn new(raw: impl Into<String>) -> Result<Self, CourseError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(CourseError::EmptyDuration);
        }
        if !mentions_time_unit(&raw) {
            return Err(CourseError::InvalidDuration(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn mentions_time_unit(raw: &str) -> bool {
    let lowered = raw.to_lowercase();
    DURATION_UNITS.iter().any(|unit| lowered.contains(unit))
}

/// A course in the catalog: id, name and duration validated together.
///
/// Validation runs in id → name → duration order and stops at the first
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    name: CourseName,
    duration: CourseDuration,
}

impl Course {
    /// Builds a course from raw string components.
    ///
    /// # Errors
    ///
    /// Returns the first value-object validation failure encountered.
    pub fn new(id: &str, name: &str, duration: &str) -> Result<Self, CourseError> {
        let id = CourseId::new(id)?;
        let name = CourseName::new(name)?;
        let duration = CourseDuration::new(duration)?;

        Ok(Self { id, name, duration })
    }

    /// Returns the course identifier.
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    /// Returns the course name.
    pub fn name(&self) -> &CourseName {
        &self.name
    }

    /// Returns the course duration.
    pub fn duration(&self) -> &CourseDuration {
        &self.duration
    }
}
