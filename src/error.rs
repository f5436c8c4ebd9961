//! Errors raised at the input boundary.
//!
//! Core timetable operations never fail: conflicts and missing entries are
//! reported through `bool` returns and sentinel messages. These errors cover
//! turning raw caller input (menu answers, configuration files) into the
//! typed values the core expects.

use thiserror::Error;

/// Input and configuration errors.
#[derive(Debug, Error)]
pub enum TimetableError {
    /// Day ordinal outside `0..=4`.
    #[error("day must be between 0 (MONDAY) and 4 (FRIDAY), got {0}")]
    InvalidDay(i64),

    /// A numeric field could not be parsed.
    #[error("invalid {field}: '{value}'")]
    InvalidNumber {
        /// Which field was being parsed.
        field: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },

    /// No configured time slot carries this period.
    #[error("no time slot for period {0}")]
    UnknownPeriod(u32),

    /// A required field was left blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Malformed configuration document.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias for boundary operations.
pub type Result<T> = std::result::Result<T, TimetableError>;

/// Parses a trimmed numeric answer, tagging failures with the field name.
pub(crate) fn parse_number<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T> {
    let raw = raw.trim();
    raw.parse().map_err(|_| TimetableError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

/// Rejects a blank answer for a required field.
pub(crate) fn required(field: &'static str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        Err(TimetableError::MissingField(field))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        let n: u32 = parse_number("period", " 3 ").unwrap();
        assert_eq!(n, 3);

        let err = parse_number::<u32>("period", "three").unwrap_err();
        assert!(matches!(err, TimetableError::InvalidNumber { field: "period", .. }));
        assert_eq!(err.to_string(), "invalid period: 'three'");
    }

    #[test]
    fn test_required() {
        assert_eq!(required("class ID", "C1".to_string()).unwrap(), "C1");
        assert!(matches!(
            required("class ID", "  ".to_string()),
            Err(TimetableError::MissingField("class ID"))
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TimetableError::InvalidDay(7).to_string(),
            "day must be between 0 (MONDAY) and 4 (FRIDAY), got 7"
        );
        assert_eq!(
            TimetableError::UnknownPeriod(9).to_string(),
            "no time slot for period 9"
        );
        assert_eq!(
            TimetableError::MissingField("class ID").to_string(),
            "class ID is required"
        );
    }
}
