pub mod gate;
pub mod manager;
pub mod store;

pub use gate::{OnboardingStatus, Route};
pub use manager::StateManager;
pub use store::{KeyValueStore, MemoryStore};
