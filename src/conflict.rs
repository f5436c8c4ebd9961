//! Double-booking check applied when an entry is inserted.
//!
//! Two entries conflict when they share a day and a period and also share
//! either a teacher or a class. Rooms are not considered, and ids are
//! compared as-is without consulting any registry.
//!
//! # Complexity
//! O(n) in the number of existing entries; stops at the first conflict.

use crate::models::TimetableEntry;

/// Whether `candidate` would double-book a teacher or class in `existing`.
pub fn has_conflict(candidate: &TimetableEntry, existing: &[TimetableEntry]) -> bool {
    existing.iter().any(|entry| conflicts_with(entry, candidate))
}

/// Whether two entries share a slot and a teacher or class.
pub fn conflicts_with(a: &TimetableEntry, b: &TimetableEntry) -> bool {
    a.same_slot(b) && (a.teacher_id == b.teacher_id || a.class_id == b.class_id)
}
