//! Teacher model.
//!
//! The subject list is informational: it is shown to users and may name
//! codes that are not registered. Scheduling never checks it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A teacher, keyed by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier, e.g. `"T001"`.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Subject codes this teacher covers (may be empty).
    #[serde(default)]
    pub subjects: Vec<String>,
}

impl Teacher {
    /// Creates a teacher with no subjects.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subjects: Vec::new(),
        }
    }

    /// Adds a subject code.
    pub fn with_subject(mut self, code: impl Into<String>) -> Self {
        self.subjects.push(code.into());
        self
    }

    /// Replaces the subject list.
    pub fn with_subjects<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the subject code appears in this teacher's list.
    pub fn teaches(&self, code: &str) -> bool {
        self.subjects.iter().any(|s| s == code)
    }
}

impl fmt::Display for Teacher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_builder() {
        let t = Teacher::new("T001", "Mr. Smith")
            .with_subject("MATH")
            .with_subject("PHYS");

        assert_eq!(t.id, "T001");
        assert_eq!(t.name, "Mr. Smith");
        assert_eq!(t.subjects, vec!["MATH", "PHYS"]);
        assert!(t.teaches("MATH"));
        assert!(!t.teaches("ENG"));
        assert_eq!(t.to_string(), "Mr. Smith (T001)");
    }

    #[test]
    fn test_teacher_without_subjects() {
        let t = Teacher::new("T002", "Ms. Johnson");
        assert!(t.subjects.is_empty());
    }

    #[test]
    fn test_teacher_subjects_default_on_deserialize() {
        let t: Teacher = serde_json::from_str(r#"{"id":"T9","name":"Sub"}"#).unwrap();
        assert!(t.subjects.is_empty());
    }
}
