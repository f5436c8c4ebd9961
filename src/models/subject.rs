//! Subject model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A taught subject, keyed by its code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject code, e.g. `"MATH"`.
    pub code: String,
    /// Human-readable name.
    pub name: String,
}

impl Subject {
    /// Creates a new subject.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code, self.name)
    }
}
