//! Provider trait definition

use async_trait::async_trait;

use crate::types::{ChatMessage, ToolDeclaration};
use super::error::ProviderResult;

/// Which model to call and how to reach it
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderModelConfig {
    /// Model identifier as the service knows it, e.g. `openai/gpt-4o-mini`
    pub model: String,
    /// Explicit API key; when `None` the provider's environment variable is used
    pub api_key: Option<String>,
    /// Endpoint override
    pub api_base: Option<String>,
}

impl ProviderModelConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            api_key: None,
            api_base: None,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }
}

/// Per-request options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatOptions {
    /// Functions the model may call; `None` sends no tools at all
    pub tools: Option<Vec<ToolDeclaration>>,
}

impl ChatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer these functions to the model
    pub fn with_tools(mut self, tools: Vec<ToolDeclaration>) -> Self {
        self.tools = Some(tools);
        self
    }
}

/// A chat-completion backend
///
/// A chat call sends the whole history and returns exactly one assistant
/// message, which may carry text, tool calls, or both.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider id, e.g. "openrouter"
    fn name(&self) -> &str;

    /// Run one chat completion
    async fn chat(
        &self,
        messages: &[ChatMessage],
        model: &ProviderModelConfig,
        options: &ChatOptions,
    ) -> ProviderResult<ChatMessage>;
}
