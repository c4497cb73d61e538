//! Configuration errors.

use thiserror::Error;

/// Errors that can occur while loading a machine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Malformed(#[from] serde_json::Error),
}
