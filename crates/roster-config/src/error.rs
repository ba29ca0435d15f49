//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl From<ConfigError> for figment::Error {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::Figment(inner) => inner,
            other => Self::from(other.to_string()),
        }
    }
}
