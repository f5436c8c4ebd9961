//! Time slot model.
//!
//! A time slot is one fixed period of the school day. Slots are identified
//! by their period number; the start and end times are opaque labels that
//! are displayed but never parsed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A numbered period of the school day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Period number (shared meaning across all days).
    pub period: u32,
    /// Start label, e.g. `"08:00"`.
    pub start_time: String,
    /// End label, e.g. `"08:50"`.
    pub end_time: String,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(period: u32, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            period,
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Period {} ({}-{})",
            self.period, self.start_time, self.end_time
        )
    }
}
