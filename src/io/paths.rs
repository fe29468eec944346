use crate::{KeepCalmError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE_NAME: &str = "keepcalm.yaml";
pub const STATE_FILE_NAME: &str = "state.json";
pub const LOG_FILE_NAME: &str = "keepcalm.log";

/// Path management for keepcalm settings, state and logs
#[derive(Debug, Clone)]
pub struct KeepCalmPaths {
    /// Configuration directory (holds keepcalm.yaml)
    pub config_dir: PathBuf,
    /// Data directory (holds state.json and the log file)
    pub data_dir: PathBuf,
}

impl KeepCalmPaths {
    /// Create new paths instance using standard directories
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "keepcalm").ok_or_else(|| {
            KeepCalmError::Path("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
            data_dir: dirs.data_dir().to_path_buf(),
        })
    }

    /// Keep everything under `root/.keepcalm`
    pub fn under(root: &Path) -> Self {
        let dir = root.join(".keepcalm");
        Self {
            config_dir: dir.clone(),
            data_dir: dir,
        }
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE_NAME)
    }

    pub fn state_file(&self) -> PathBuf {
        self.data_dir.join(STATE_FILE_NAME)
    }

    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }

    /// Ensure all directories exist
    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}

impl Default for KeepCalmPaths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if platform directories fail
            let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Self::under(&current_dir)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_under_root() {
        let paths = KeepCalmPaths::under(Path::new("/tmp/project"));
        assert_eq!(
            paths.settings_file(),
            PathBuf::from("/tmp/project/.keepcalm/keepcalm.yaml")
        );
        assert_eq!(paths.state_file(), PathBuf::from("/tmp/project/.keepcalm/state.json"));
        assert_eq!(paths.log_file(), PathBuf::from("/tmp/project/.keepcalm/keepcalm.log"));
    }

    #[test]
    fn test_default_file_names() {
        let paths = KeepCalmPaths::default();
        assert!(paths.settings_file().ends_with(SETTINGS_FILE_NAME));
        assert!(paths.state_file().ends_with(STATE_FILE_NAME));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KeepCalmPaths::under(temp_dir.path());
        paths.ensure_directories().unwrap();
        assert!(paths.config_dir.is_dir());
        assert!(paths.data_dir.is_dir());
    }
}
