//! School day model.
//!
//! The timetable covers a five-day week. Each day carries an ordinal used
//! for ordering and parsing, and an upper-case name used for display.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, TimetableError};

/// A school day, MONDAY through FRIDAY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl DayOfWeek {
    /// All days in ordinal order.
    pub const ALL: [DayOfWeek; 5] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
    ];

    /// Ordinal (MONDAY = 0 .. FRIDAY = 4).
    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Upper-case display name.
    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "MONDAY",
            DayOfWeek::Tuesday => "TUESDAY",
            DayOfWeek::Wednesday => "WEDNESDAY",
            DayOfWeek::Thursday => "THURSDAY",
            DayOfWeek::Friday => "FRIDAY",
        }
    }

    /// Looks up a day by ordinal.
    ///
    /// # Errors
    /// [`TimetableError::InvalidDay`] for anything outside `0..=4`.
    pub fn from_ordinal(ordinal: i64) -> Result<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(TimetableError::InvalidDay(ordinal))
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
