//! Goal Tracker MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for tracking
//! personal goals across four fixed categories (academic, spiritual, financial,
//! personal), a weekly class timetable, and a weekly food budget. State is
//! persisted as a single JSON blob and can be exported as a paginated report.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `GoalTrackerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `tracker` module - State model, progress and budget rules
//! - **Persistence Layer**: `storage` module - Single-key JSON storage
//!
//! Every mutating tool applies its change to a copy of the state, saves the
//! copy and only then replaces the in-memory state, so what is stored always
//! matches what `list` shows.
//!
//! # Example
//!
//! ```no_run
//! use goal_tracker::{Config, GoalTrackerHandler};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = GoalTrackerHandler::new("tracker-data", Config::default())?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod formatting;
pub mod handlers;
pub mod logging;
pub mod report;
pub mod storage;
pub mod tracker;
pub mod validation;

use anyhow::Result;
use log::{error, info};
use mcp_attr::server::{McpServer, mcp_server};
use mcp_attr::{Result as McpResult, bail_public};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

// Re-export commonly used types
pub use config::Config;
pub use storage::{FileStore, KeyValueStore, MemoryStore, STORAGE_KEY, Storage};
pub use tracker::{
    AppState, BudgetChecker, BudgetStatus, Category, GoalEntry, StatusColor, TimetableEntry,
    TrackerError,
};

/// MCP Server handler for goal tracking
///
/// Owns the single in-memory `AppState` and the storage it is persisted to.
/// All tools go through this handler, which makes it the one controller of
/// the tracked state.
pub struct GoalTrackerHandler {
    pub(crate) state: Mutex<AppState>,
    pub(crate) storage: Storage,
    pub(crate) budget_checker: BudgetChecker,
    /// Last evaluated budget status (view state, not persisted)
    pub(crate) budget_status: Mutex<Option<BudgetStatus>>,
    pub(crate) report_path: PathBuf,
}

impl GoalTrackerHandler {
    /// Create a handler storing its data under `data_dir`
    ///
    /// # Arguments
    /// * `data_dir` - Directory holding the state file and, by default, reports
    /// * `config` - Budget and report settings
    ///
    /// # Example
    /// ```no_run
    /// # use goal_tracker::{Config, GoalTrackerHandler};
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = GoalTrackerHandler::new("tracker-data", Config::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(data_dir: impl AsRef<Path>, config: Config) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir)?;
        let report_path = config.report_path(data_dir);
        Ok(Self::with_storage(Storage::new(data_dir), &config, report_path))
    }

    /// Create a handler over an existing storage
    ///
    /// The stored state is loaded immediately. A stored budget is re-evaluated
    /// so its status is available without another check.
    pub fn with_storage(storage: Storage, config: &Config, report_path: PathBuf) -> Self {
        let state = storage.load();
        let budget_checker = config.budget_checker();
        let budget_status = if state.budget().is_empty() {
            None
        } else {
            Some(budget_checker.check(state.budget()))
        };

        info!(
            "event=state_restore status=ok goals={} timetable={} budget_set={}",
            state.goal_count(),
            state.timetable().len(),
            budget_status.is_some()
        );

        Self {
            state: Mutex::new(state),
            storage,
            budget_checker,
            budget_status: Mutex::new(budget_status),
            report_path,
        }
    }

    /// Copy of the current in-memory state
    pub fn state(&self) -> AppState {
        self.lock_state().clone()
    }

    /// Last evaluated budget status, if any
    pub fn budget_status(&self) -> Option<BudgetStatus> {
        self.lock_budget_status().clone()
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub(crate) fn lock_state(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn lock_budget_status(&self) -> MutexGuard<'_, Option<BudgetStatus>> {
        self.budget_status
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Save `next` and make it the current state
    ///
    /// `current` is only replaced once the save succeeded. On failure it keeps
    /// its previous value and the error is reported as a tool error.
    pub(crate) fn commit(
        &self,
        current: &mut AppState,
        next: AppState,
        action: &str,
    ) -> McpResult<()> {
        if let Err(e) = self.storage.save(&next) {
            error!("event={} status=error error={:#}", action, e);
            bail_public!(_, "Failed to save: {}", e);
        }
        *current = next;
        info!("event={} status=ok", action);
        Ok(())
    }
}

/// Goal tracker: checklists in four fixed categories, a weekly class timetable
/// and a weekly food budget check.
///
/// Key concepts:
/// - **Categories**: academic, spiritual, financial, personal
/// - **Positions**: goals and timetable rows are addressed by their 1-based
///   position as shown by `list`; deleting shifts later items up
/// - **Progress**: percentage of checked goals in a category
/// - **Budget**: compared against a fixed weekly limit (default ₦18,000)
///
/// Every change is saved immediately.
#[mcp_server]
impl McpServer for GoalTrackerHandler {
    /// **Add goal**: Append an unchecked goal to a category, stamped with the current time.
    #[tool]
    async fn add_goal(
        &self,
        /// Category: academic/spiritual/financial/personal
        category: String,
        /// Goal text (must not be blank)
        text: String,
    ) -> McpResult<String> {
        self.handle_add_goal(category, text).await
    }

    /// **Check/uncheck goal**: Flip a goal's done flag and report the category's progress.
    #[tool]
    async fn toggle_goal(
        &self,
        /// Category: academic/spiritual/financial/personal
        category: String,
        /// Goal position as shown by list (starts at 1)
        position: u32,
    ) -> McpResult<String> {
        self.handle_toggle_goal(category, position).await
    }

    /// **Edit goal**: Replace a goal's text. Blank text is rejected and the goal is left unchanged.
    #[tool]
    async fn edit_goal(
        &self,
        /// Category: academic/spiritual/financial/personal
        category: String,
        /// Goal position as shown by list (starts at 1)
        position: u32,
        /// New goal text
        text: String,
    ) -> McpResult<String> {
        self.handle_edit_goal(category, position, text).await
    }

    /// **Goal notes**: Replace a goal's notes. Empty string clears them.
    #[tool]
    async fn update_notes(
        &self,
        /// Category: academic/spiritual/financial/personal
        category: String,
        /// Goal position as shown by list (starts at 1)
        position: u32,
        /// Notes text, stored as given
        notes: String,
    ) -> McpResult<String> {
        self.handle_update_notes(category, position, notes).await
    }

    /// **Delete goal**: Remove a goal from a category.
    #[tool]
    async fn delete_goal(
        &self,
        /// Category: academic/spiritual/financial/personal
        category: String,
        /// Goal position as shown by list (starts at 1)
        position: u32,
    ) -> McpResult<String> {
        self.handle_delete_goal(category, position).await
    }

    /// **Review**: Show goals with progress, the timetable and the budget status.
    /// **Use**: No category = everything; a category = just that list.
    #[tool]
    async fn list(
        &self,
        /// Category filter: academic/spiritual/financial/personal (optional)
        category: Option<String>,
        /// Exclude notes from output (optional, default false)
        exclude_notes: Option<bool>,
    ) -> McpResult<String> {
        self.handle_list(category, exclude_notes).await
    }

    /// **Add class**: Append a timetable row. All three fields are required.
    #[tool]
    async fn add_timetable(
        &self,
        /// Day (e.g., "Monday")
        day: String,
        /// Subject (e.g., "Algorithms")
        subject: String,
        /// Time (e.g., "10:00")
        time: String,
    ) -> McpResult<String> {
        self.handle_add_timetable(day, subject, time).await
    }

    /// **Remove class**: Delete a timetable row.
    #[tool]
    async fn delete_timetable(
        &self,
        /// Row position as shown by list (starts at 1)
        position: u32,
    ) -> McpResult<String> {
        self.handle_delete_timetable(position).await
    }

    /// **Budget check**: Compare a weekly food budget against the limit and save it when valid.
    #[tool]
    async fn check_budget(
        &self,
        /// Budget amount (e.g., "15000")
        amount: String,
    ) -> McpResult<String> {
        self.handle_check_budget(amount).await
    }

    /// **Export**: Write a paginated report of all goals and the timetable.
    #[tool]
    async fn export_report(
        &self,
        /// Output file path (optional, defaults to the configured report file)
        path: Option<String>,
    ) -> McpResult<String> {
        self.handle_export_report(path).await
    }
}
