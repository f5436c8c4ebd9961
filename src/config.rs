//! School day configuration.
//!
//! Declares the periods of the school day. The default is seven 50-minute
//! periods starting on the hour from 08:00. A JSON document can replace it:
//!
//! ```json
//! { "time_slots": [ { "period": 1, "start_time": "08:30", "end_time": "09:15" } ] }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::models::TimeSlot;
use crate::Timetable;

/// Periods of the school day, in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolDayConfig {
    pub time_slots: Vec<TimeSlot>,
}

impl Default for SchoolDayConfig {
    fn default() -> Self {
        let time_slots = (1..=7)
            .map(|period| {
                let hour = 7 + period;
                TimeSlot::new(period, format!("{hour:02}:00"), format!("{hour:02}:50"))
            })
            .collect();
        Self { time_slots }
    }
}

impl SchoolDayConfig {
    /// Parses a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Registers the configured time slots on a timetable.
    pub fn apply(&self, timetable: &mut Timetable) {
        for slot in &self.time_slots {
            timetable.add_time_slot(slot.clone());
        }
    }

    /// Builds an empty timetable with these time slots.
    pub fn build_timetable(&self) -> Timetable {
        let mut timetable = Timetable::new();
        self.apply(&mut timetable);
        timetable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimetableError;

    #[test]
    fn test_default_school_day() {
        let cfg = SchoolDayConfig::default();
        assert_eq!(cfg.time_slots.len(), 7);
        assert_eq!(cfg.time_slots[0], TimeSlot::new(1, "08:00", "08:50"));
        assert_eq!(cfg.time_slots[6], TimeSlot::new(7, "14:00", "14:50"));
    }

    #[test]
    fn test_from_json_keeps_declared_order() {
        let cfg = SchoolDayConfig::from_json_str(
            r#"{"time_slots": [
                {"period": 2, "start_time": "09:00", "end_time": "09:45"},
                {"period": 1, "start_time": "08:00", "end_time": "08:45"}
            ]}"#,
        )
        .unwrap();

        let tt = cfg.build_timetable();
        let periods: Vec<u32> = tt.time_slots().iter().map(|s| s.period).collect();
        assert_eq!(periods, vec![2, 1]);
    }

    #[test]
    fn test_malformed_json() {
        let err = SchoolDayConfig::from_json_str("{\"time_slots\": 3}").unwrap_err();
        assert!(matches!(err, TimetableError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SchoolDayConfig::load("/nonexistent/school-day.json").unwrap_err();
        assert!(matches!(err, TimetableError::Io(_)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let cfg = SchoolDayConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(SchoolDayConfig::from_json_str(&json).unwrap(), cfg);
    }
}
