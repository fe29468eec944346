use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::FocusStatus;

pub const DEFAULT_TICK_RATE_MS: u64 = 50;

fn default_tick_rate_ms() -> u64 {
    DEFAULT_TICK_RATE_MS
}

/// Global settings for the application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Focus status the dashboard opens with
    #[serde(default)]
    pub initial_status: FocusStatus,

    /// Redraw cadence of the terminal UI
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Override of the persisted-state path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_status: FocusStatus::default(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            state_file: None,
        }
    }
}

/// Root structure of keepcalm.yaml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RootConfig {
    #[serde(default)]
    pub settings: Settings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_settings_use_defaults() {
        let config: RootConfig = serde_yaml_ng::from_str("settings:\n  initial_status: Sleep\n").unwrap();
        assert_eq!(config.settings.initial_status, FocusStatus::Sleep);
        assert_eq!(config.settings.tick_rate_ms, 50);
        assert_eq!(config.settings.state_file, None);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<RootConfig, _> = serde_yaml_ng::from_str("settings:\n  theme: dark\n");
        assert!(result.is_err());
        let result: Result<RootConfig, _> = serde_yaml_ng::from_str("imports: []\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_skips_missing_state_file() {
        let yaml = serde_yaml_ng::to_string(&RootConfig::default()).unwrap();
        assert!(yaml.contains("initial_status: Work"));
        assert!(!yaml.contains("state_file"));
    }
}
