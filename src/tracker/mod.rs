//! Goal tracker domain models and business logic
//!
//! This module contains the tracked state and the rules applied to it.
//! It is split into submodules:
//! - `category`: The four fixed goal categories
//! - `goal`: Checklist entries and their creation timestamps
//! - `timetable`: Weekly class timetable rows
//! - `app_state`: The persisted root and every mutation on it
//! - `progress`: Per-category completion percentage
//! - `budget`: Weekly food budget parsing and threshold check
//! - `serde_impl`: Lenient deserialization of stored state

mod app_state;
mod budget;
mod category;
mod error;
mod goal;
mod progress;
mod serde_impl;
mod timetable;

// Re-export all public types
pub use app_state::AppState;
pub use budget::{
    BudgetChecker, BudgetOutcome, BudgetStatus, DEFAULT_BUDGET_LIMIT, DEFAULT_CURRENCY_SYMBOL,
    StatusColor, format_amount, parse_float_prefix,
};
pub use category::Category;
pub use error::TrackerError;
pub use goal::{GoalEntry, creation_timestamp, timestamp_now};
pub use progress::progress_percent;
pub use timetable::TimetableEntry;
