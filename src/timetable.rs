//! The timetable aggregate.
//!
//! Owns the reference registries and the entry store, and is the only place
//! where the no-double-booking rule is enforced. All operations are
//! synchronous and in-memory; mutators take `&mut self`, so a concurrent
//! host must hold its own lock around them.

use serde::{Deserialize, Serialize};

use crate::conflict::has_conflict;
use crate::models::{DayOfWeek, SchoolClass, Subject, Teacher, TimeSlot, TimetableEntry};
use crate::registry::Registry;
use crate::validation::{validate_entries, ValidationError};

/// A school's weekly timetable.
///
/// # Example
///
/// ```
/// use u_timetable::models::{DayOfWeek, TimeSlot, TimetableEntry};
/// use u_timetable::Timetable;
///
/// let mut tt = Timetable::new();
/// let p1 = TimeSlot::new(1, "08:00", "08:50");
///
/// let first = TimetableEntry::new(DayOfWeek::Monday, p1.clone(), "C1", "MATH", "T001");
/// let clash = TimetableEntry::new(DayOfWeek::Monday, p1, "C2", "ENG", "T001");
///
/// assert!(tt.add_entry(first));
/// assert!(!tt.add_entry(clash)); // T001 is already teaching
/// assert!(tt.validate().is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    subjects: Registry<Subject>,
    teachers: Registry<Teacher>,
    classes: Registry<SchoolClass>,
    time_slots: Vec<TimeSlot>,
    entries: Vec<TimetableEntry>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    // ---- registries -------------------------------------------------------

    /// Registers a subject, overwriting any subject with the same code.
    pub fn add_subject(&mut self, subject: Subject) {
        self.subjects.insert(subject);
    }

    /// Registers a teacher, overwriting any teacher with the same id.
    pub fn add_teacher(&mut self, teacher: Teacher) {
        self.teachers.insert(teacher);
    }

    /// Registers a class, overwriting any class with the same id.
    pub fn add_class(&mut self, school_class: SchoolClass) {
        self.classes.insert(school_class);
    }

    /// Appends a time slot in declared order.
    pub fn add_time_slot(&mut self, time_slot: TimeSlot) {
        self.time_slots.push(time_slot);
    }

    /// Registered subjects.
    pub fn subjects(&self) -> &Registry<Subject> {
        &self.subjects
    }

    /// Registered teachers.
    pub fn teachers(&self) -> &Registry<Teacher> {
        &self.teachers
    }

    /// Registered classes.
    pub fn classes(&self) -> &Registry<SchoolClass> {
        &self.classes
    }

    /// Time slots in declared order.
    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    pub fn subject(&self, code: &str) -> Option<&Subject> {
        self.subjects.get(code)
    }

    pub fn teacher(&self, id: &str) -> Option<&Teacher> {
        self.teachers.get(id)
    }

    pub fn school_class(&self, id: &str) -> Option<&SchoolClass> {
        self.classes.get(id)
    }

    /// First declared time slot with this period.
    pub fn time_slot(&self, period: u32) -> Option<&TimeSlot> {
        self.time_slots.iter().find(|s| s.period == period)
    }

    // ---- entries ----------------------------------------------------------

    /// Adds an entry unless it double-books a teacher or class.
    ///
    /// Returns `false` and leaves the timetable unchanged on conflict.
    pub fn add_entry(&mut self, entry: TimetableEntry) -> bool {
        if self.has_conflict(&entry) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Whether `entry` would conflict with the stored entries.
    pub fn has_conflict(&self, entry: &TimetableEntry) -> bool {
        has_conflict(entry, &self.entries)
    }

    /// Removes the first entry for `class_id` at `day`/`period`.
    ///
    /// Matching ignores teacher and subject. Returns `false` if nothing
    /// matched.
    pub fn remove_entry(&mut self, day: DayOfWeek, period: u32, class_id: &str) -> bool {
        match self
            .entries
            .iter()
            .position(|e| e.day == day && e.period() == period && e.class_id == class_id)
        {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Entries for a class, in insertion order.
    pub fn get_entries_for_class(&self, class_id: &str) -> Vec<TimetableEntry> {
        self.filter_entries(|e| e.class_id == class_id)
    }

    /// Entries for a teacher, in insertion order.
    pub fn get_entries_for_teacher(&self, teacher_id: &str) -> Vec<TimetableEntry> {
        self.filter_entries(|e| e.teacher_id == teacher_id)
    }

    /// Entries on a day, in insertion order.
    pub fn get_entries_for_day(&self, day: DayOfWeek) -> Vec<TimetableEntry> {
        self.filter_entries(|e| e.day == day)
    }

    fn filter_entries(&self, pred: impl Fn(&TimetableEntry) -> bool) -> Vec<TimetableEntry> {
        self.entries.iter().filter(|e| pred(e)).cloned().collect()
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[TimetableEntry] {
        &self.entries
    }

    /// Direct access to the entry store.
    ///
    /// Changes made here skip the conflict check; run [`Timetable::validate`]
    /// afterwards to find double-bookings.
    pub fn entries_mut(&mut self) -> &mut Vec<TimetableEntry> {
        &mut self.entries
    }

    /// Number of stored entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    // ---- validation -------------------------------------------------------

    /// Scans all entry pairs for double-bookings.
    ///
    /// Returns one message per detected issue; an empty list means the
    /// timetable is consistent.
    pub fn validate(&self) -> Vec<String> {
        self.validate_detailed()
            .into_iter()
            .map(|e| e.message)
            .collect()
    }

    /// Same scan as [`Timetable::validate`], with structured errors.
    pub fn validate_detailed(&self) -> Vec<ValidationError> {
        validate_entries(&self.entries)
    }
}
