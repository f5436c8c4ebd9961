//! Timetable domain models.
//!
//! Reference data (subjects, teachers, classes, time slots) and the
//! entries that bind them into a weekly schedule.
//!
//! # Identity
//!
//! | Type | Key |
//! |------|-----|
//! | Subject | `code` |
//! | Teacher | `id` |
//! | SchoolClass | `id` |
//! | TimeSlot | `period` |
//! | TimetableEntry | none (legality is checked on insertion) |

mod day;
mod entry;
mod school_class;
mod subject;
mod teacher;
mod time_slot;

pub use day::DayOfWeek;
pub use entry::TimetableEntry;
pub use school_class::SchoolClass;
pub use subject::Subject;
pub use teacher::Teacher;
pub use time_slot::TimeSlot;
