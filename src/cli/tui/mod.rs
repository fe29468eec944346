//! Terminal front-end for onboarding and the dashboard
pub mod app;
pub mod events;
pub mod modal;
pub mod screens;
pub mod state;
pub mod theme;

use crate::config::Settings;
use crate::state::KeyValueStore;
use crate::Result;

pub use app::App;

/// Run the terminal application until the user quits
pub async fn run(store: Box<dyn KeyValueStore>, settings: Settings) -> Result<()> {
    let app = App::new(store, settings)?;
    app.run().await
}
