use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::state::store::KeyValueStore;
use crate::{KeepCalmError, Result};

/// JSON-file key/value store. The whole map is rewritten on every mutation.
pub struct StateManager {
    /// Path of the JSON state file
    path: PathBuf,
    /// In-memory copy of the file
    cache: BTreeMap<String, String>,
}

impl StateManager {
    /// Open the state file at `path`, creating its directory if needed
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let cache = Self::load(path)?;
        debug!(path = %path.display(), keys = cache.len(), "Opened state file");

        Ok(Self {
            path: path.to_path_buf(),
            cache,
        })
    }

    /// Read the map from disk; a missing or empty file is an empty map
    fn load(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        match serde_json::from_str(&content) {
            Ok(map) => Ok(map),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "State file is not a JSON object");
                Err(KeepCalmError::State(format!(
                    "{} is not a JSON object of strings: {}",
                    path.display(),
                    e
                )))
            }
        }
    }

    fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.cache)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Get the state file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for StateManager {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.cache.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.cache.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.cache.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }
}
