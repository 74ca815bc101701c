//! Goal list handlers for the goal tracker MCP server

use crate::GoalTrackerHandler;
use crate::tracker;
use crate::validation;
use mcp_attr::Result as McpResult;

impl GoalTrackerHandler {
    /// Appends a new unchecked goal stamped with the current local time.
    pub async fn handle_add_goal(&self, category: String, text: String) -> McpResult<String> {
        let category = validation::parse_category(&category)?;

        let mut state = self.lock_state();
        let mut next = state.clone();
        let goal = next
            .add_goal(category, &text, tracker::timestamp_now())
            .map_err(validation::tracker_error)?
            .clone();
        let position = next.goals(category).len();
        let progress = next.progress(category);
        self.commit(&mut state, next, "goal_add")?;

        Ok(format!(
            "Added goal {} to {}: {}{} (progress: {}%)",
            position, category, goal.text, goal.time, progress
        ))
    }

    /// Flips a goal's checkbox and reports the category's new progress.
    pub async fn handle_toggle_goal(&self, category: String, position: u32) -> McpResult<String> {
        let category = validation::parse_category(&category)?;
        let index = validation::parse_position(position)?;

        let mut state = self.lock_state();
        let mut next = state.clone();
        let done = next
            .toggle_goal(category, index)
            .map_err(validation::tracker_error)?;
        let progress = next.progress(category);
        self.commit(&mut state, next, "goal_toggle")?;

        Ok(format!(
            "Goal {} in {} marked {} (progress: {}%)",
            position,
            category,
            if done { "done" } else { "not done" },
            progress
        ))
    }

    /// Replaces a goal's text; blank replacements are rejected and nothing is saved.
    pub async fn handle_edit_goal(
        &self,
        category: String,
        position: u32,
        text: String,
    ) -> McpResult<String> {
        let category = validation::parse_category(&category)?;
        let index = validation::parse_position(position)?;

        let mut state = self.lock_state();
        let mut next = state.clone();
        let new_text = next
            .edit_goal(category, index, &text)
            .map_err(validation::tracker_error)?
            .text
            .clone();
        self.commit(&mut state, next, "goal_edit")?;

        Ok(format!("Goal {} in {} updated: {}", position, category, new_text))
    }

    /// Overwrites a goal's notes exactly as given (empty clears them).
    pub async fn handle_update_notes(
        &self,
        category: String,
        position: u32,
        notes: String,
    ) -> McpResult<String> {
        let category = validation::parse_category(&category)?;
        let index = validation::parse_position(position)?;

        let mut state = self.lock_state();
        let mut next = state.clone();
        next.update_notes(category, index, notes)
            .map_err(validation::tracker_error)?;
        self.commit(&mut state, next, "goal_notes")?;

        Ok(format!("Notes for goal {} in {} saved", position, category))
    }

    /// Removes a goal; later goals move up one position.
    pub async fn handle_delete_goal(&self, category: String, position: u32) -> McpResult<String> {
        let category = validation::parse_category(&category)?;
        let index = validation::parse_position(position)?;

        let mut state = self.lock_state();
        let mut next = state.clone();
        let removed = next
            .delete_goal(category, index)
            .map_err(validation::tracker_error)?;
        let progress = next.progress(category);
        self.commit(&mut state, next, "goal_delete")?;

        Ok(format!(
            "Deleted goal {} from {}: {} (progress: {}%)",
            position, category, removed.text, progress
        ))
    }
}
