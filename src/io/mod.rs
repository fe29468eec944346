pub mod paths;

pub use paths::KeepCalmPaths;
