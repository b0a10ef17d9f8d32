//! Chat session errors

use thiserror::Error;

use crate::config::ConfigError;
use crate::mcp::McpError;
use crate::providers::ProviderError;
use crate::tools::SchemaError;

/// Anything that can end a chat session
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Tool server error: {0}")]
    Mcp(#[from] McpError),

    #[error("Model error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Tool schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ChatResult<T> = Result<T, ChatError>;
