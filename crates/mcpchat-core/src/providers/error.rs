//! Provider error types

use thiserror::Error;

/// Errors from a model call
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The request reached the service and failed (network, auth, bad reply)
    #[error("{provider} request failed: {message}")]
    Request { provider: String, message: String },

    /// The history cannot be expressed in the provider's message format
    #[error("Invalid conversation history: {0}")]
    InvalidHistory(String),

    /// A tool call could not be re-encoded for the provider
    #[error("Tool call encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),

    /// Raised by `MockProvider`
    #[error("Mock error: {0}")]
    Mock(String),
}

impl ProviderError {
    pub fn request(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Request {
            provider: provider.into(),
            message: message.into(),
        }
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;
