use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid chart slot: {0}")]
    InvalidSlot(String),

    #[error("Unknown conversion mode: {0}")]
    UnknownMode(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
