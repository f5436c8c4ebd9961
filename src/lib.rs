//! Weekly school timetable management.
//!
//! Registries of subjects, teachers, classes, and daily time slots, plus a
//! store of timetable entries that never double-books a teacher or class.
//! This is not a solver: each proposed entry is accepted or rejected
//! against the current state, nothing more.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `DayOfWeek`, `TimeSlot`, `Subject`,
//!   `Teacher`, `SchoolClass`, `TimetableEntry`
//! - **`registry`**: Insertion-ordered keyed stores with silent overwrite
//! - **`conflict`**: The insertion-time double-booking check
//! - **`validation`**: Full pairwise re-check of stored entries
//! - **`timetable`**: The `Timetable` aggregate (add/remove/query/validate)
//! - **`display`**: Per-class and per-teacher text views
//! - **`config`**: School day (time slot) configuration
//! - **`sample`**: Demonstration data set
//! - **`cli`**: Interactive menu session
//!
//! # Error Model
//!
//! Core operations never fail. Conflicts and missing entries are reported
//! through `bool` returns, not-found messages, and empty validation lists.
//! [`TimetableError`] only covers parsing caller input and configuration.

pub mod cli;
pub mod config;
pub mod conflict;
mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod registry;
pub mod sample;
pub mod timetable;
pub mod validation;

pub use error::TimetableError;
pub use timetable::Timetable;
