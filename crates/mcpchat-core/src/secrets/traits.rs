//! Secret lookup trait

use thiserror::Error;

/// Errors that can occur while reading secret sources
#[derive(Error, Debug)]
pub enum SecretStoreError {
    #[error("Secret not found: {0}")]
    NotFound(String),

    #[error(".env error: {0}")]
    Dotenv(#[from] dotenvy::Error),
}

pub type SecretStoreResult<T> = Result<T, SecretStoreError>;

/// Read-only source of secrets such as API keys
///
/// Keys are variable names (`OPENAI_API_KEY`, `LD_API_KEY`, ...).
pub trait SecretStore: Send + Sync {
    /// Short name used in log lines ("env", "dotenv", ...)
    fn name(&self) -> &str;

    /// Retrieve a secret by key; empty values count as missing
    fn get(&self, key: &str) -> Option<String>;

    /// Retrieve a secret or fail with `NotFound`
    fn require(&self, key: &str) -> SecretStoreResult<String> {
        self.get(key)
            .ok_or_else(|| SecretStoreError::NotFound(key.to_string()))
    }

    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Name of the store that would answer `key`
    fn source(&self, key: &str) -> Option<&str> {
        self.has(key).then(|| self.name())
    }
}
