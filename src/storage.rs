//! Persistence of the tracked state under a single key
//!
//! State lives in a key-value store as one JSON blob under `STORAGE_KEY`.
//! Saving always overwrites the whole blob. Loading never fails: a missing,
//! unreadable or malformed blob reads as an empty state.

use crate::tracker::AppState;
use anyhow::{Context, Result};
use log::{debug, warn};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Key under which the whole state is stored
pub const STORAGE_KEY: &str = "goalTrackerProV2";

/// Minimal string key-value store
pub trait KeyValueStore: Send + Sync {
    /// Read the value for `key`, or `None` when it was never written
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// Key-value store keeping one `<key>.json` file per key in a directory
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the file backing `key`
    pub fn item_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let path = self.item_path(key);
        fs::write(&path, value).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

/// In-memory key-value store
#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and writes the tracked state through a key-value backend
pub struct Storage {
    backend: Box<dyn KeyValueStore>,
}

impl Storage {
    /// File-backed storage rooted at `data_dir`
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self::with_backend(FileStore::new(data_dir))
    }

    /// Storage over any key-value backend
    pub fn with_backend(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Load the stored state
    ///
    /// Never fails: a missing key, a read error or a malformed blob all
    /// produce an empty state.
    pub fn load(&self) -> AppState {
        match self.backend.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => decode_state(&raw),
            Ok(None) => {
                debug!("event=state_load status=empty reason=missing_key");
                AppState::new()
            }
            Err(e) => {
                warn!("event=state_load status=empty reason=read_error error={:#}", e);
                AppState::new()
            }
        }
    }

    /// Overwrite the stored state with `state`
    pub fn save(&self, state: &AppState) -> Result<()> {
        let content = encode_state(state)?;
        self.backend.set_item(STORAGE_KEY, &content)?;
        debug!(
            "event=state_save status=ok goals={} timetable={} bytes={}",
            state.goal_count(),
            state.timetable().len(),
            content.len()
        );
        Ok(())
    }

    /// Raw stored blob, if any
    pub fn read_raw(&self) -> Result<Option<String>> {
        self.backend.get_item(STORAGE_KEY)
    }

    /// Replace the raw stored blob
    pub fn write_raw(&self, raw: &str) -> Result<()> {
        self.backend.set_item(STORAGE_KEY, raw)
    }
}

/// Serialize the state to its stored JSON form
pub fn encode_state(state: &AppState) -> Result<String> {
    serde_json::to_string(state).context("Failed to serialize tracker state")
}

/// Parse a stored JSON blob, falling back to an empty state
pub fn decode_state(raw: &str) -> AppState {
    match serde_json::from_str::<Option<AppState>>(raw) {
        Ok(state) => state.unwrap_or_default(),
        Err(e) => {
            warn!("event=state_load status=empty reason=malformed error={}", e);
            AppState::new()
        }
    }
}
