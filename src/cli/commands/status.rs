use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{CommandContext, CommandHandler};
use crate::cli::OutputFormat;
use crate::state::{gate, KeyValueStore, Route};
use crate::Result;

/// Handler for the `status` command
pub struct StatusCommand {
    pub context: CommandContext,
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct StatusReport {
    completed: bool,
    completed_at: Option<DateTime<Utc>>,
    next_screen: Route,
    store: String,
}

impl CommandHandler for StatusCommand {
    fn execute(&self) -> Result<()> {
        let store = self.context.open_store()?;
        println!("{}", self.render(store.as_ref())?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "status"
    }
}

impl StatusCommand {
    /// Create new status command
    pub fn new(context: CommandContext, format: OutputFormat) -> Self {
        Self { context, format }
    }

    /// Format the onboarding status of `store`
    pub fn render(&self, store: &dyn KeyValueStore) -> Result<String> {
        let status = gate::status(store)?;
        let report = StatusReport {
            completed: status.completed,
            completed_at: status.completed_at,
            next_screen: gate::initial_route(store)?,
            store: self.context.store_label(),
        };

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
            OutputFormat::Text => {
                let mut out = if report.completed {
                    "Onboarding: completed".to_string()
                } else {
                    "Onboarding: not completed".to_string()
                };
                if let Some(at) = report.completed_at {
                    out.push_str(&format!("\nCompleted at: {}", at.to_rfc3339()));
                }
                let next = match report.next_screen {
                    Route::Onboarding => "onboarding",
                    Route::Dashboard => "dashboard",
                };
                out.push_str(&format!("\nNext start opens: {}", next));
                out.push_str(&format!("\nState: {}", report.store));
                Ok(out)
            }
        }
    }
}
