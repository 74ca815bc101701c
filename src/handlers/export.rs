//! Report export handler for the goal tracker MCP server

use crate::GoalTrackerHandler;
use crate::report;
use log::error;
use mcp_attr::{Result as McpResult, bail_public};
use std::path::PathBuf;

impl GoalTrackerHandler {
    /// Writes a report of the persisted state to `path` or the configured report file.
    pub async fn handle_export_report(&self, path: Option<String>) -> McpResult<String> {
        let path = match path {
            Some(p) if !p.trim().is_empty() => PathBuf::from(p.trim()),
            _ => self.report_path.clone(),
        };

        match report::export_report(&self.storage, &path) {
            Ok(summary) => Ok(format!(
                "Report written to {} ({} goal(s), {} timetable entry(ies), {} page(s))",
                path.display(),
                summary.goals,
                summary.timetable_entries,
                summary.pages
            )),
            Err(e) => {
                error!("event=report_export status=error error={:#}", e);
                bail_public!(_, "Failed to export report: {:#}", e);
            }
        }
    }
}
