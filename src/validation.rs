//! Full-scan validation of stored entries.
//!
//! `add_entry` rejects double-bookings as they arrive, but entries can also
//! reach the store through direct mutation. This module re-checks every
//! stored pair independently of how the entries got there.
//!
//! # Algorithm
//! For every unordered pair `(i, j)` with `i < j` that shares a day and
//! period, report one error if they share a teacher and a separate error if
//! they share a class. O(n²) in the number of entries.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{DayOfWeek, TimetableEntry};

/// A detected double-booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// The double-booked teacher or class id.
    pub entity_id: String,
    /// Day of the collision.
    pub day: DayOfWeek,
    /// Period of the collision.
    pub period: u32,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// A teacher is booked twice in the same slot.
    TeacherConflict,
    /// A class is booked twice in the same slot.
    ClassConflict,
}

impl ValidationError {
    fn new(
        kind: ValidationErrorKind,
        entity_id: impl Into<String>,
        day: DayOfWeek,
        period: u32,
    ) -> Self {
        let entity_id = entity_id.into();
        let label = match kind {
            ValidationErrorKind::TeacherConflict => "Teacher",
            ValidationErrorKind::ClassConflict => "Class",
        };
        let message = format!("{label} {entity_id} has conflict on {day} period {period}");
        Self {
            kind,
            entity_id,
            day,
            period,
            message,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Checks all stored entries for teacher and class double-bookings.
///
/// # Returns
/// Every detected issue in scan order; empty when the entries are consistent.
pub fn validate_entries(entries: &[TimetableEntry]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (i, first) in entries.iter().enumerate() {
        for second in &entries[i + 1..] {
            if !first.same_slot(second) {
                continue;
            }
            if first.teacher_id == second.teacher_id {
                errors.push(ValidationError::new(
                    ValidationErrorKind::TeacherConflict,
                    &first.teacher_id,
                    first.day,
                    first.period(),
                ));
            }
            if first.class_id == second.class_id {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ClassConflict,
                    &first.class_id,
                    first.day,
                    first.period(),
                ));
            }
        }
    }

    errors
}
