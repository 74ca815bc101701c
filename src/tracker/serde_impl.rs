//! Lenient deserialization for AppState
//!
//! Stored blobs are read the forgiving way: only the four category keys, the
//! timetable and the budget are looked at, anything else is ignored, and a
//! field of the wrong shape is treated as if it were missing. This holds for
//! the fields of each goal and timetable row too: an element is only skipped
//! when it is not an object at all.

use super::app_state::AppState;
use super::category::Category;
use super::goal::GoalEntry;
use super::timetable::TimetableEntry;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};

impl<'de> Deserialize<'de> for AppState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let Value::Object(fields) = value else {
            return Ok(AppState::new());
        };

        let mut state = AppState::new();
        for category in Category::ALL {
            state.populate_goals(category, lenient_seq(&fields, category.key(), goal_entry));
        }
        state.populate_timetable(lenient_seq(&fields, "academicTimetable", timetable_entry));
        state.set_budget(lenient_text(&fields, "weeklyFoodBudget"));
        Ok(state)
    }
}

/// Read `key` as a sequence of objects, decoding each with `decode`
///
/// A missing key, `null`, or a non-array value all yield an empty sequence.
/// Elements that are not objects are skipped.
fn lenient_seq<T>(
    fields: &Map<String, Value>,
    key: &str,
    decode: fn(&Map<String, Value>) -> T,
) -> Vec<T> {
    match fields.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_object().map(decode))
            .collect(),
        _ => Vec::new(),
    }
}

fn goal_entry(fields: &Map<String, Value>) -> GoalEntry {
    GoalEntry {
        text: lenient_text(fields, "text"),
        done: fields.get("done").is_some_and(truthy),
        time: lenient_text(fields, "time"),
        notes: lenient_text(fields, "notes"),
    }
}

fn timetable_entry(fields: &Map<String, Value>) -> TimetableEntry {
    TimetableEntry {
        day: lenient_text(fields, "day"),
        subject: lenient_text(fields, "subject"),
        time: lenient_text(fields, "time"),
    }
}

/// Read `key` as text; numbers are kept in their JSON spelling
///
/// Falsy values (`null`, `false`, `0`, missing) read as empty text.
fn lenient_text(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if nonzero(n) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        _ => String::new(),
    }
}

/// Truthiness of a stored flag: `0`, `""`, `false` and `null` are false
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => nonzero(n),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn nonzero(n: &Number) -> bool {
    n.as_f64().is_some_and(|f| f != 0.0)
}
