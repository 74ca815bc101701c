use super::category::Category;
use thiserror::Error;

/// Validation failures raised by tracker operations
///
/// Every variant is recoverable: the operation is rejected and the state is
/// left untouched. The display text is what the user sees.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    #[error("Please enter a goal.")]
    EmptyGoal,

    #[error("Goal text cannot be empty. The goal was left unchanged.")]
    EmptyEdit,

    #[error("Please fill all timetable fields.")]
    IncompleteTimetableEntry,

    #[error(
        "Invalid category '{0}'. Valid categories: academic, spiritual, financial, personal"
    )]
    UnknownCategory(String),

    #[error("No goal at position {position} in {category} ({len} goal(s) listed)")]
    GoalNotFound {
        category: Category,
        position: usize,
        len: usize,
    },

    #[error("No timetable entry at position {position} ({len} entry(ies) listed)")]
    TimetableEntryNotFound { position: usize, len: usize },
}
