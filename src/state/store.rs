use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::Result;

/// Keys of the persisted application state.
pub mod keys {
    pub const DIET_PLAN: &str = "diet_plan";
    pub const WEEK_PLAN: &str = "week_plan";
    pub const CURRENT_PLAN_ID: &str = "current_plan_id";
    pub const PINNED_PLANS: &str = "pinned_plans";
    pub const CHECKED_ITEMS: &str = "checked_items";
}

/// Key-value store for JSON-serialized application state.
pub trait StateStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>>;

    fn set_raw(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;

    /// Read and deserialize a value.
    ///
    /// Unreadable or corrupt entries are logged, discarded and reported as absent.
    fn load<T: DeserializeOwned>(&mut self, key: &str) -> Option<T>
    where
        Self: Sized,
    {
        let raw = match self.get_raw(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("failed to read '{}' from state store: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("discarding corrupt state entry '{}': {}", key, e);
                if let Err(e) = self.remove(key) {
                    warn!("failed to remove corrupt entry '{}': {}", key, e);
                }
                None
            }
        }
    }

    /// Serialize and write a value.
    fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()>
    where
        Self: Sized,
    {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json)
    }
}

/// In-memory store, used in tests and for throwaway sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set_raw` calls.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl StateStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_raw(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by one `<key>.json` file per entry in a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StateStore for JsonFileStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set_raw(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
