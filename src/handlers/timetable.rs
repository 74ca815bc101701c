//! Timetable handlers for the goal tracker MCP server

use crate::GoalTrackerHandler;
use crate::validation;
use mcp_attr::Result as McpResult;

impl GoalTrackerHandler {
    /// Appends a timetable row. Day, subject and time are all required.
    pub async fn handle_add_timetable(
        &self,
        day: String,
        subject: String,
        time: String,
    ) -> McpResult<String> {
        let mut state = self.lock_state();
        let mut next = state.clone();
        let line = next
            .add_timetable_entry(&day, &subject, &time)
            .map_err(validation::tracker_error)?
            .line();
        let position = next.timetable().len();
        self.commit(&mut state, next, "timetable_add")?;

        Ok(format!("Added timetable entry {}: {}", position, line))
    }

    /// Removes a timetable row by position.
    pub async fn handle_delete_timetable(&self, position: u32) -> McpResult<String> {
        let index = validation::parse_position(position)?;

        let mut state = self.lock_state();
        let mut next = state.clone();
        let removed = next
            .delete_timetable_entry(index)
            .map_err(validation::tracker_error)?;
        self.commit(&mut state, next, "timetable_delete")?;

        Ok(format!(
            "Deleted timetable entry {}: {}",
            position,
            removed.line()
        ))
    }
}
