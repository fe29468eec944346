use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::FocusStatus;

/// Keep Calm: notification triage with focus modes and categories
#[derive(Parser, Debug)]
#[command(name = "keepcalm")]
#[command(version)]
#[command(about = "Notification triage with focus modes, categories and a guided onboarding")]
pub struct Cli {
    /// Settings file (defaults to keepcalm.yaml in the config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Persisted state file (overrides the settings file)
    #[arg(long, global = true)]
    pub state_file: Option<PathBuf>,

    /// Focus status the dashboard opens with (work, privat or sleep)
    #[arg(long, global = true)]
    pub initial_status: Option<FocusStatus>,

    /// Keep state in memory only; nothing is written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Log level
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq, Default)]
pub enum Commands {
    /// Run the terminal application (default)
    #[default]
    Start,

    /// Show whether onboarding has been completed
    Status {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Clear the onboarding flag so the next start shows onboarding again
    Reset,
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Start => "start",
            Commands::Status { .. } => "status",
            Commands::Reset => "reset",
        }
    }

    /// Whether the command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self, Commands::Start)
    }
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_no_subcommand_means_start() {
        let cli = Cli::parse_from(["keepcalm"]);
        assert_eq!(cli.command, None);
        assert_eq!(cli.command.unwrap_or_default(), Commands::Start);
        assert_eq!(cli.log_level, LogLevel::Info);
        assert!(!cli.ephemeral);
        assert_eq!(cli.initial_status, None);
    }

    #[test]
    fn test_initial_status_is_case_insensitive() {
        let cli = Cli::parse_from(["keepcalm", "--initial-status", "sleep"]);
        assert_eq!(cli.initial_status, Some(FocusStatus::Sleep));
        let cli = Cli::parse_from(["keepcalm", "start", "--initial-status", "PRIVAT"]);
        assert_eq!(cli.initial_status, Some(FocusStatus::Privat));
        assert!(Cli::try_parse_from(["keepcalm", "--initial-status", "holiday"]).is_err());
    }

    #[test]
    fn test_status_command() {
        let cli = Cli::parse_from(["keepcalm", "status", "--format", "json"]);
        match cli.command {
            Some(Commands::Status { format }) => assert_eq!(format, OutputFormat::Json),
            _ => panic!("Wrong command parsed"),
        }

        let cli = Cli::parse_from(["keepcalm", "status"]);
        assert_eq!(
            cli.command,
            Some(Commands::Status {
                format: OutputFormat::Text
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "keepcalm",
            "reset",
            "--state-file",
            "/tmp/state.json",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.command, Some(Commands::Reset));
        assert_eq!(cli.state_file, Some(PathBuf::from("/tmp/state.json")));
        assert_eq!(cli.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_start_flags() {
        let cli = Cli::parse_from(["keepcalm", "--ephemeral", "--config", "kc.yaml", "start"]);
        assert!(cli.ephemeral);
        assert_eq!(cli.config, Some(PathBuf::from("kc.yaml")));
        assert_eq!(cli.command, Some(Commands::Start));
    }

    #[test]
    fn test_invalid_format_rejected() {
        assert!(Cli::try_parse_from(["keepcalm", "status", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_command_properties() {
        assert_eq!(Commands::Start.name(), "start");
        assert!(Commands::Start.is_interactive());
        assert!(!Commands::Reset.is_interactive());
        assert_eq!(LogLevel::Trace.to_filter_directive(), "trace");
    }
}
