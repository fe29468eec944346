pub mod reset;
pub mod start;
pub mod status;

use std::path::PathBuf;

use tracing::debug;

use crate::cli::Cli;
use crate::config::{Settings, SettingsLoader};
use crate::io::KeepCalmPaths;
use crate::state::{KeyValueStore, MemoryStore, StateManager};
use crate::Result;

pub use reset::ResetCommand;
pub use start::StartCommand;
pub use status::StatusCommand;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Settings and storage location shared by every command
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub settings: Settings,
    pub state_file: PathBuf,
    pub ephemeral: bool,
}

impl CommandContext {
    /// Resolve settings and the state path. CLI flags win over the settings file.
    pub fn from_cli(cli: &Cli, paths: &KeepCalmPaths) -> Result<Self> {
        let settings_path = cli.config.clone().unwrap_or_else(|| paths.settings_file());
        let mut settings = SettingsLoader::load(&settings_path)?.settings;
        if let Some(status) = cli.initial_status {
            settings.initial_status = status;
        }

        let state_file = cli
            .state_file
            .clone()
            .or_else(|| settings.state_file.clone())
            .unwrap_or_else(|| paths.state_file());

        debug!(
            settings = %settings_path.display(),
            state = %state_file.display(),
            ephemeral = cli.ephemeral,
            initial_status = %settings.initial_status,
            "Resolved command context"
        );

        Ok(Self {
            settings,
            state_file,
            ephemeral: cli.ephemeral,
        })
    }

    /// Open the persistence port for this run
    pub fn open_store(&self) -> Result<Box<dyn KeyValueStore>> {
        if self.ephemeral {
            return Ok(Box::new(MemoryStore::new()));
        }
        Ok(Box::new(StateManager::open(&self.state_file)?))
    }

    /// Human-readable store location
    pub fn store_label(&self) -> String {
        if self.ephemeral {
            "memory".to_string()
        } else {
            self.state_file.display().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FocusStatus;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_state_file_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KeepCalmPaths::under(temp_dir.path());

        let cli = Cli::parse_from(["keepcalm", "status"]);
        let context = CommandContext::from_cli(&cli, &paths).unwrap();
        assert_eq!(context.state_file, paths.state_file());

        paths.ensure_directories().unwrap();
        fs::write(
            paths.settings_file(),
            "settings:\n  state_file: /from/settings.json\n",
        )
        .unwrap();
        let context = CommandContext::from_cli(&cli, &paths).unwrap();
        assert_eq!(context.state_file, PathBuf::from("/from/settings.json"));

        let cli = Cli::parse_from(["keepcalm", "status", "--state-file", "/from/flag.json"]);
        let context = CommandContext::from_cli(&cli, &paths).unwrap();
        assert_eq!(context.state_file, PathBuf::from("/from/flag.json"));
    }

    #[test]
    fn test_initial_status_flag_overrides_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KeepCalmPaths::under(temp_dir.path());
        paths.ensure_directories().unwrap();
        fs::write(paths.settings_file(), "settings:\n  initial_status: Privat\n").unwrap();

        let cli = Cli::parse_from(["keepcalm", "status"]);
        let context = CommandContext::from_cli(&cli, &paths).unwrap();
        assert_eq!(context.settings.initial_status, FocusStatus::Privat);

        let cli = Cli::parse_from(["keepcalm", "--initial-status", "sleep", "status"]);
        let context = CommandContext::from_cli(&cli, &paths).unwrap();
        assert_eq!(context.settings.initial_status, FocusStatus::Sleep);
    }

    #[test]
    fn test_ephemeral_store_touches_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KeepCalmPaths::under(temp_dir.path());
        let cli = Cli::parse_from(["keepcalm", "--ephemeral", "reset"]);
        let context = CommandContext::from_cli(&cli, &paths).unwrap();

        let mut store = context.open_store().unwrap();
        store.set("k", "v").unwrap();
        assert!(!context.state_file.exists());
        assert_eq!(context.store_label(), "memory");
    }
}
