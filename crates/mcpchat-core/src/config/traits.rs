//! Configuration errors

use crate::secrets::SecretStoreError;

/// Errors that can occur while loading or resolving configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required value was found in neither the config file nor the secrets
    #[error("Missing required value: {0} (set it in the environment or .env)")]
    MissingValue(String),

    #[error("Invalid config file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Secret lookup failed: {0}")]
    Secrets(#[from] SecretStoreError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
