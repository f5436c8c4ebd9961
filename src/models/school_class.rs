//! School class (student group) model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A class or grade group, keyed by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolClass {
    /// Unique class identifier, e.g. `"C1"`.
    pub id: String,
    /// Human-readable name, e.g. `"Grade 9A"`.
    pub name: String,
    /// Enrolled students (default: 0).
    #[serde(default)]
    pub students_count: u32,
}

impl SchoolClass {
    /// Creates a class with no students recorded.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            students_count: 0,
        }
    }

    /// Sets the student count.
    pub fn with_students(mut self, count: u32) -> Self {
        self.students_count = count;
        self
    }
}

impl fmt::Display for SchoolClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} students)", self.name, self.students_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_creation() {
        let c = SchoolClass::new("C1", "Grade 9A").with_students(25);
        assert_eq!(c.id, "C1");
        assert_eq!(c.students_count, 25);
        assert_eq!(c.to_string(), "Grade 9A (25 students)");
    }

    #[test]
    fn test_class_default_students() {
        let c = SchoolClass::new("C2", "Grade 9B");
        assert_eq!(c.students_count, 0);
    }
}
