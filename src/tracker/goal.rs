use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A single checklist entry inside a category
///
/// Entries have no identity beyond their position in the list: two goals with
/// the same text are indistinguishable, and every mutation addresses a goal by
/// index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalEntry {
    /// Goal text as entered (already trimmed)
    pub text: String,
    /// Whether the goal is checked off
    pub done: bool,
    /// Display-only creation timestamp, e.g. " (3/15/2025, 2:05:09 PM)"
    ///
    /// Set once when the goal is created and carried through every save untouched.
    pub time: String,
    /// Free-form notes, stored exactly as written
    pub notes: String,
}

impl GoalEntry {
    /// Create an unchecked goal with empty notes
    pub fn new(text: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
            time: time.into(),
            notes: String::new(),
        }
    }

    /// Checkbox marker used in listings and reports
    pub fn marker(&self) -> &'static str {
        if self.done { "[x] " } else { "[ ] " }
    }

    /// Whether the notes contain anything besides whitespace
    pub fn has_notes(&self) -> bool {
        !self.notes.trim().is_empty()
    }
}

/// Format a creation timestamp the way goals display it
///
/// # Arguments
/// * `now` - The creation moment
///
/// # Returns
/// A string such as `" (3/15/2025, 2:05:09 PM)"`, including the leading space
pub fn creation_timestamp<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(" ({})", now.format("%-m/%-d/%Y, %-I:%M:%S %p"))
}

/// Creation timestamp for the current local time
pub fn timestamp_now() -> String {
    creation_timestamp(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_new_goal_starts_unchecked_without_notes() {
        let goal = GoalEntry::new("Finish thesis", " (1/2/2025, 9:00:00 AM)");
        assert!(!goal.done);
        assert!(goal.notes.is_empty());
        assert_eq!(goal.marker(), "[ ] ");
    }

    #[test]
    fn test_creation_timestamp_format() {
        let moment = Utc.with_ymd_and_hms(2025, 3, 15, 14, 5, 9).unwrap();
        assert_eq!(creation_timestamp(&moment), " (3/15/2025, 2:05:09 PM)");

        let morning = Utc.with_ymd_and_hms(2024, 11, 2, 0, 30, 0).unwrap();
        assert_eq!(creation_timestamp(&morning), " (11/2/2024, 12:30:00 AM)");
    }

    #[test]
    fn test_blank_notes_are_not_notes() {
        let mut goal = GoalEntry::new("Read", "");
        goal.notes = "  \n ".to_string();
        assert!(!goal.has_notes());
        goal.notes = "chapter 3".to_string();
        assert!(goal.has_notes());
    }
}
