use super::goal::GoalEntry;

/// Percentage of checked goals, rounded to the nearest whole number
///
/// An empty list yields 0.
pub fn progress_percent(goals: &[GoalEntry]) -> u8 {
    if goals.is_empty() {
        return 0;
    }
    let done = goals.iter().filter(|g| g.done).count();
    (done as f64 / goals.len() as f64 * 100.0).round() as u8
}
