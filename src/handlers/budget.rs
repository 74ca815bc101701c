//! Budget handler for the goal tracker MCP server

use crate::GoalTrackerHandler;
use log::info;
use mcp_attr::Result as McpResult;

impl GoalTrackerHandler {
    /// Evaluates a weekly food budget against the configured limit.
    ///
    /// Invalid input is reported (red) but neither stored nor saved, so the
    /// previously accepted budget stays in place. Valid input is stored as
    /// typed and saved whether it is over or under the limit.
    pub async fn handle_check_budget(&self, amount: String) -> McpResult<String> {
        let status = self.budget_checker.check(&amount);
        let reply = format!("{} (status: {})", status.message, status.color);

        if status.is_valid() {
            let mut state = self.lock_state();
            let mut next = state.clone();
            next.set_budget(amount);
            self.commit(&mut state, next, "budget_check")?;
        } else {
            info!("event=budget_check status=invalid");
        }

        *self.lock_budget_status() = Some(status);
        Ok(reply)
    }
}
