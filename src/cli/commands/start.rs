use super::{CommandContext, CommandHandler};
use crate::Result;

/// Handler for the `start` command
pub struct StartCommand {
    pub context: CommandContext,
}

impl CommandHandler for StartCommand {
    #[cfg(feature = "tui")]
    fn execute(&self) -> Result<()> {
        let store = self.context.open_store()?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        runtime.block_on(crate::cli::tui::run(store, self.context.settings.clone()))
    }

    #[cfg(not(feature = "tui"))]
    fn execute(&self) -> Result<()> {
        Err(crate::KeepCalmError::Cli(
            "keepcalm was built without the `tui` feature; `start` is unavailable".to_string(),
        ))
    }

    fn name(&self) -> &'static str {
        "start"
    }
}

impl StartCommand {
    /// Create new start command
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }
}
