//! mcpchat Core
//!
//! A terminal chat client that lets a hosted LLM use the tools of an MCP
//! server. The server runs as a child process and is spoken to over stdio;
//! the model is reached through `genai` (OpenRouter by default).
//!
//! ## Query cycle
//!
//! Each user query refreshes the server's tool list, sends the history and
//! tool declarations to the model, runs the first tool the model asks for,
//! and asks the model once more with the tool's output.
//!
//! ```rust,ignore
//! use mcpchat_core::{ChatConfig, ChatSession, ChainSecretStore, ConfigFile, NoOpLogger};
//! use std::sync::Arc;
//!
//! let secrets = ChainSecretStore::standard()?;
//! let config = ChatConfig::resolve(&ConfigFile::load_default()?, &secrets)?;
//!
//! let mut session = ChatSession::connect(&config, Arc::new(NoOpLogger)).await?;
//! let answer = session.process_query("Which flags are enabled?").await?;
//! session.close().await?;
//! ```

pub mod types;
pub mod secrets;
pub mod logging;
pub mod config;
pub mod providers;
pub mod tools;
pub mod mcp;
pub mod chat;

// Re-export commonly used types
pub use types::{
    ChatMessage, ContentPart, MessageRole, MessageContent,
    Tool, ToolArguments, ToolCall, ToolDeclaration, ToolOutput,
};

pub use secrets::{
    SecretStore, SecretStoreError, SecretStoreResult,
    EnvSecretStore, DotenvSecretStore, MemorySecretStore, ChainSecretStore,
};

pub use logging::{Logger, NoOpLogger, ConsoleLogger, FileLogger};

pub use config::{ChatConfig, ConfigError, ConfigFile, ConfigResult, ServerLaunchConfig};

pub use providers::{
    create_provider, ChatOptions, MockProvider, Provider, ProviderError, ProviderModelConfig,
    ProviderResult,
};

pub use tools::{format_tools, parse_arguments, SchemaError, SchemaResult};

// MCP client using official rmcp SDK
pub use mcp::{McpClient, McpError, McpResult, MockToolSource, ToolSource};

pub use chat::{ChatError, ChatResult, ChatSession, Conversation};
