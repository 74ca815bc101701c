use super::error::TrackerError;
use serde::{Deserialize, Serialize};

/// One row of the weekly class timetable
///
/// Rows have no key. Duplicates are allowed and rows are removed by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableEntry {
    pub day: String,
    pub subject: String,
    pub time: String,
}

impl TimetableEntry {
    /// Build a row from raw form input
    ///
    /// All three fields are trimmed and must be non-empty.
    pub fn new(day: &str, subject: &str, time: &str) -> Result<Self, TrackerError> {
        let (day, subject, time) = (day.trim(), subject.trim(), time.trim());
        if day.is_empty() || subject.is_empty() || time.is_empty() {
            return Err(TrackerError::IncompleteTimetableEntry);
        }
        Ok(Self {
            day: day.to_string(),
            subject: subject.to_string(),
            time: time.to_string(),
        })
    }

    /// Single-line rendering: `day - subject - time`
    pub fn line(&self) -> String {
        format!("{} - {} - {}", self.day, self.subject, self.time)
    }
}
