pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod state;

pub use error::{KeepCalmError, Result};
