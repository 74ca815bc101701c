//! Common test utilities for integration tests
#![allow(dead_code)]

use goal_tracker::{Config, GoalTrackerHandler, MemoryStore, Storage};
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a test handler with a temporary data directory
pub fn get_test_handler() -> (GoalTrackerHandler, TempDir) {
    let dir = TempDir::new().unwrap();
    let handler = GoalTrackerHandler::new(dir.path(), Config::default()).unwrap();
    (handler, dir)
}

/// Reopen a handler over the same data directory, as after a restart
pub fn reopen_handler(dir: &TempDir) -> GoalTrackerHandler {
    GoalTrackerHandler::new(dir.path(), Config::default()).unwrap()
}

/// Create a handler over in-memory storage pre-filled with `raw`
pub fn handler_with_raw_state(raw: &str) -> GoalTrackerHandler {
    let storage = Storage::with_backend(MemoryStore::new());
    storage.write_raw(raw).unwrap();
    GoalTrackerHandler::with_storage(storage, &Config::default(), PathBuf::from("report.txt"))
}

/// Parse the persisted blob of a handler as JSON
pub fn persisted_json(handler: &GoalTrackerHandler) -> serde_json::Value {
    let raw = handler
        .storage()
        .read_raw()
        .unwrap()
        .expect("state should have been saved");
    serde_json::from_str(&raw).unwrap()
}
