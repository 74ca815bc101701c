//! Formatting helper functions for the goal tracker MCP server
//!
//! This module renders the tracked state as the text shown by `list`.

use crate::tracker::{AppState, BudgetStatus, Category};

/// Render one category: title with progress, then numbered goals
///
/// # Arguments
/// * `state` - State to read from
/// * `category` - Category to render
/// * `exclude_notes` - Whether to leave notes out of the output
pub fn format_category(state: &AppState, category: Category, exclude_notes: bool) -> String {
    let goals = state.goals(category);
    let mut result = format!(
        "{} ({}) - progress: {}%\n",
        category.title(),
        category.key(),
        state.progress(category)
    );

    if goals.is_empty() {
        result.push_str("  No goals added.\n");
        return result;
    }

    for (i, goal) in goals.iter().enumerate() {
        result.push_str(&format!("  {}. {}{}{}\n", i + 1, goal.marker(), goal.text, goal.time));
        if !exclude_notes && goal.has_notes() {
            for line in goal.notes.lines() {
                result.push_str(&format!("     Notes: {}\n", line));
            }
        }
    }
    result
}

/// Render the timetable as numbered `day - subject - time` rows
pub fn format_timetable(state: &AppState) -> String {
    let mut result = String::from("Academic Timetable\n");
    if state.timetable().is_empty() {
        result.push_str("  No timetable entries.\n");
        return result;
    }
    for (i, entry) in state.timetable().iter().enumerate() {
        result.push_str(&format!("  {}. {}\n", i + 1, entry.line()));
    }
    result
}

/// Render the stored budget and its last evaluated status
pub fn format_budget(state: &AppState, status: Option<&BudgetStatus>) -> String {
    let mut result = String::from("Weekly Food Budget\n");
    if state.budget().is_empty() {
        result.push_str("  Not set.\n");
    } else {
        result.push_str(&format!("  Amount: {}\n", state.budget()));
    }
    if let Some(status) = status {
        result.push_str(&format!("  Status ({}): {}\n", status.color, status.message));
    }
    result
}

/// Render every section in display order
pub fn format_overview(
    state: &AppState,
    budget_status: Option<&BudgetStatus>,
    exclude_notes: bool,
) -> String {
    let mut sections: Vec<String> = Category::ALL
        .iter()
        .map(|c| format_category(state, *c, exclude_notes))
        .collect();
    sections.push(format_timetable(state));
    sections.push(format_budget(state, budget_status));
    sections.join("\n")
}
