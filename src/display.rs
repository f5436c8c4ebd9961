//! Text views of a timetable.
//!
//! Per-class and per-teacher listings sorted by day then period, grouped
//! under one header per day. Missing registry records never fail a render:
//! the name is shown as `Unknown`.
//!
//! # Layout
//!
//! ```text
//!
//! Timetable for Grade 9A
//! ======================================================================
//!
//! MONDAY
//! ----------------------------------------------------------------------
//!   Period 1 (08:00-08:50) | Mathematics          | Mr. Smith            | Room: R101
//! ```

use crate::models::{DayOfWeek, TimetableEntry};
use crate::Timetable;

const RULE_WIDTH: usize = 70;
const UNKNOWN: &str = "Unknown";

impl Timetable {
    /// Renders the weekly schedule of a class.
    ///
    /// Returns a not-found message for unregistered classes and a
    /// no-entries message when the class has nothing scheduled.
    pub fn display_class_timetable(&self, class_id: &str) -> String {
        let Some(school_class) = self.school_class(class_id) else {
            return format!("Class {class_id} not found");
        };
        let entries = self.get_entries_for_class(class_id);
        if entries.is_empty() {
            return format!("No timetable entries for class {class_id}");
        }

        render(self, &school_class.name, entries, |e| {
            self.teacher(&e.teacher_id)
                .map_or(UNKNOWN, |t| t.name.as_str())
                .to_string()
        })
    }

    /// Renders the weekly schedule of a teacher.
    ///
    /// Returns a not-found message for unregistered teachers and a
    /// no-entries message when the teacher has nothing scheduled.
    pub fn display_teacher_timetable(&self, teacher_id: &str) -> String {
        let Some(teacher) = self.teacher(teacher_id) else {
            return format!("Teacher {teacher_id} not found");
        };
        let entries = self.get_entries_for_teacher(teacher_id);
        if entries.is_empty() {
            return format!("No timetable entries for teacher {teacher_id}");
        }

        render(self, &teacher.name, entries, |e| {
            self.school_class(&e.class_id)
                .map_or(UNKNOWN, |c| c.name.as_str())
                .to_string()
        })
    }

    /// Lists every entry in insertion order, one per line.
    pub fn display_all_entries(&self) -> String {
        if self.entries().is_empty() {
            return "No timetable entries yet.".to_string();
        }
        let mut lines = vec!["All Timetable Entries:".to_string()];
        lines.extend(self.entries().iter().map(|e| format!("  - {e}")));
        lines.join("\n")
    }
}

fn render(
    timetable: &Timetable,
    title: &str,
    mut entries: Vec<TimetableEntry>,
    counterpart: impl Fn(&TimetableEntry) -> String,
) -> String {
    // Stable: equal (day, period) keys keep insertion order.
    entries.sort_by_key(TimetableEntry::sort_key);

    let mut lines = vec![
        String::new(),
        format!("Timetable for {title}"),
        "=".repeat(RULE_WIDTH),
    ];
    let mut current_day: Option<DayOfWeek> = None;

    for entry in &entries {
        if current_day != Some(entry.day) {
            current_day = Some(entry.day);
            lines.push(String::new());
            lines.push(entry.day.name().to_string());
            lines.push("-".repeat(RULE_WIDTH));
        }

        let subject = timetable
            .subject(&entry.subject_code)
            .map_or(UNKNOWN, |s| s.name.as_str());
        lines.push(format!(
            "  {} | {:<20} | {:<20} | Room: {}",
            entry.time_slot,
            subject,
            counterpart(entry),
            entry.room_label()
        ));
    }

    lines.join("\n")
}
