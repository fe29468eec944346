use super::types::RootConfig;
use crate::{KeepCalmError, Result};
use std::path::Path;
use tracing::debug;

/// Loader for keepcalm.yaml
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load the settings file; a missing file yields defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<RootConfig> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(RootConfig::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            KeepCalmError::Config(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        if contents.trim().is_empty() {
            return Ok(RootConfig::default());
        }

        let config: RootConfig = serde_yaml_ng::from_str(&contents).map_err(|e| {
            KeepCalmError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::validate(&config)?;
        debug!(path = %path.display(), "Loaded settings");
        Ok(config)
    }

    fn validate(config: &RootConfig) -> Result<()> {
        if config.settings.tick_rate_ms == 0 {
            return Err(KeepCalmError::Config(
                "tick_rate_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
