use super::{CommandContext, CommandHandler};
use crate::state::{gate, KeyValueStore};
use crate::Result;

/// Handler for the `reset` command
pub struct ResetCommand {
    pub context: CommandContext,
}

impl CommandHandler for ResetCommand {
    fn execute(&self) -> Result<()> {
        let mut store = self.context.open_store()?;
        self.reset(store.as_mut())?;
        println!("Onboarding reset ({})", self.context.store_label());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "reset"
    }
}

impl ResetCommand {
    /// Create new reset command
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    pub fn reset(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        gate::reset(store)
    }
}
