//! Timetable entry model.
//!
//! An entry records that a class meets for a subject with a teacher in a
//! given day and period. Entries carry ids, not references: they may name
//! subjects, teachers, or classes that are not registered, and the time
//! slot is held by value.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DayOfWeek, TimeSlot};

/// One scheduled class meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    /// Day of the week.
    pub day: DayOfWeek,
    /// Period of the day.
    pub time_slot: TimeSlot,
    /// Class that meets.
    pub class_id: String,
    /// Subject taught.
    pub subject_code: String,
    /// Teacher in charge.
    pub teacher_id: String,
    /// Room label. `None` = to be announced.
    pub room: Option<String>,
}

impl TimetableEntry {
    /// Creates an entry with no room assigned.
    pub fn new(
        day: DayOfWeek,
        time_slot: TimeSlot,
        class_id: impl Into<String>,
        subject_code: impl Into<String>,
        teacher_id: impl Into<String>,
    ) -> Self {
        Self {
            day,
            time_slot,
            class_id: class_id.into(),
            subject_code: subject_code.into(),
            teacher_id: teacher_id.into(),
            room: None,
        }
    }

    /// Sets the room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Period number of this entry's time slot.
    #[inline]
    pub fn period(&self) -> u32 {
        self.time_slot.period
    }

    /// Whether both entries occupy the same day and period.
    #[inline]
    pub fn same_slot(&self, other: &Self) -> bool {
        self.day == other.day && self.period() == other.period()
    }

    /// Room label, or `"TBA"` when unassigned.
    pub fn room_label(&self) -> &str {
        self.room.as_deref().unwrap_or("TBA")
    }

    /// Ordering key used by the timetable views.
    pub(crate) fn sort_key(&self) -> (u8, u32) {
        (self.day.ordinal(), self.period())
    }
}

impl fmt::Display for TimetableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} - {} in {}",
            self.day,
            self.period(),
            self.subject_code,
            self.teacher_id,
            self.room_label()
        )
    }
}
