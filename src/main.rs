use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use keepcalm::{
    cli::commands::{CommandContext, CommandHandler, ResetCommand, StartCommand, StatusCommand},
    cli::{Cli, Commands, LogLevel},
    io::KeepCalmPaths,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Initialize tracing from --log-level, overridable through RUST_LOG.
///
/// The terminal UI owns the screen while it runs, so interactive commands
/// log to a file in the data directory; everything else logs to stderr.
fn initialize_tracing(log_level: LogLevel, command: &Commands, paths: &KeepCalmPaths) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    if command.is_interactive() {
        paths.ensure_directories()?;
        let log_file = paths.log_file();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .with_context(|| format!("Failed to open log file {}", log_file.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or_default();
    let paths = KeepCalmPaths::default();

    initialize_tracing(cli.log_level, &command, &paths)?;
    info!(command = command.name(), "keepcalm starting");

    let context =
        CommandContext::from_cli(&cli, &paths).context("Failed to resolve settings")?;

    let handler: Box<dyn CommandHandler> = match command {
        Commands::Start => Box::new(StartCommand::new(context)),
        Commands::Status { format } => Box::new(StatusCommand::new(context, format)),
        Commands::Reset => Box::new(ResetCommand::new(context)),
    };

    handler
        .execute()
        .with_context(|| format!("{} command failed", handler.name()))?;
    debug!(command = handler.name(), "Command finished");
    Ok(())
}
