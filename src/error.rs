use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeepCalmError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("State error: {0}")]
    State(String),

    #[error("CLI error: {0}")]
    Cli(String),
}

pub type Result<T> = std::result::Result<T, KeepCalmError>;
