//! List handler for the goal tracker MCP server

use crate::GoalTrackerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl GoalTrackerHandler {
    /// Renders one category, or every section when no category is given.
    pub async fn handle_list(
        &self,
        category: Option<String>,
        exclude_notes: Option<bool>,
    ) -> McpResult<String> {
        let category = match category.as_deref().map(str::trim) {
            Some(c) if !c.is_empty() => Some(validation::parse_category(c)?),
            _ => None,
        };

        let exclude_notes = exclude_notes.unwrap_or(false);
        let state = self.lock_state();
        let result = match category {
            Some(c) => formatting::format_category(&state, c, exclude_notes),
            None => {
                let status = self.lock_budget_status();
                formatting::format_overview(&state, status.as_ref(), exclude_notes)
            }
        };
        Ok(result)
    }
}
