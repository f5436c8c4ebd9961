//! Demonstration data set.
//!
//! Five subjects, five teachers, three classes, and a Monday morning
//! schedule built on the first three declared time slots.

use crate::models::{DayOfWeek, SchoolClass, Subject, Teacher, TimetableEntry};
use crate::Timetable;

/// Counts of what [`load_sample_data`] registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSummary {
    pub subjects: usize,
    pub teachers: usize,
    pub classes: usize,
    /// Entries offered to the timetable.
    pub entries: usize,
    /// Entries the timetable accepted.
    pub accepted: usize,
}

// (slot index, class, subject, teacher, room)
const SAMPLE_ENTRIES: [(usize, &str, &str, &str, &str); 7] = [
    (0, "C1", "MATH", "T001", "R101"),
    (1, "C1", "ENG", "T002", "R101"),
    (2, "C1", "SCI", "T003", "LAB1"),
    (0, "C2", "ENG", "T002", "R102"),
    (1, "C2", "MATH", "T001", "R102"),
    (0, "C3", "HIST", "T004", "R201"),
    (1, "C3", "PE", "T005", "GYM"),
];

/// Loads the demonstration data into `timetable`.
///
/// Entries use the timetable's time slots by declared position; an entry
/// whose slot index is not configured is skipped. Conflicting entries are
/// rejected the same way as any other `add_entry` call.
pub fn load_sample_data(timetable: &mut Timetable) -> SampleSummary {
    let subjects = [
        Subject::new("MATH", "Mathematics"),
        Subject::new("ENG", "English"),
        Subject::new("SCI", "Science"),
        Subject::new("HIST", "History"),
        Subject::new("PE", "Physical Education"),
    ];
    let teachers = [
        Teacher::new("T001", "Mr. Smith").with_subject("MATH"),
        Teacher::new("T002", "Ms. Johnson").with_subject("ENG"),
        Teacher::new("T003", "Dr. Brown").with_subject("SCI"),
        Teacher::new("T004", "Mrs. Davis").with_subject("HIST"),
        Teacher::new("T005", "Coach Wilson").with_subject("PE"),
    ];
    let classes = [
        SchoolClass::new("C1", "Grade 9A").with_students(25),
        SchoolClass::new("C2", "Grade 9B").with_students(28),
        SchoolClass::new("C3", "Grade 10A").with_students(24),
    ];

    let mut summary = SampleSummary {
        subjects: subjects.len(),
        teachers: teachers.len(),
        classes: classes.len(),
        entries: SAMPLE_ENTRIES.len(),
        accepted: 0,
    };
    subjects.into_iter().for_each(|s| timetable.add_subject(s));
    teachers.into_iter().for_each(|t| timetable.add_teacher(t));
    classes.into_iter().for_each(|c| timetable.add_class(c));

    for (slot_idx, class_id, subject, teacher, room) in SAMPLE_ENTRIES {
        let Some(slot) = timetable.time_slots().get(slot_idx).cloned() else {
            continue;
        };
        let entry = TimetableEntry::new(DayOfWeek::Monday, slot, class_id, subject, teacher)
            .with_room(room);
        if timetable.add_entry(entry) {
            summary.accepted += 1;
        }
    }

    summary
}
