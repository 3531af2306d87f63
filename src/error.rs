//! Domain error types for pickbox
//!
//! - `ConfigError` for configuration loading
//! - `PickboxError` as the top-level error type
//!
//! The select component itself has no error paths; these cover the host.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for pickbox
#[derive(Debug, Error)]
pub enum PickboxError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("{0}")]
    Other(String),
}

/// Errors related to loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for PickboxError
pub type Result<T> = std::result::Result<T, PickboxError>;

/// Result type alias for ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl From<String> for PickboxError {
    fn from(msg: String) -> Self {
        PickboxError::Other(msg)
    }
}

impl From<&str> for PickboxError {
    fn from(msg: &str) -> Self {
        PickboxError::Other(msg.to_string())
    }
}
