//! GenaiProvider - Unified provider using the genai crate
//!
//! Handles every genai-supported provider (OpenAI, Anthropic, Gemini, ...)
//! plus OpenAI-compatible services (OpenRouter, Mistral) routed through the
//! ServiceTargetResolver.

use async_trait::async_trait;
use std::sync::Arc;

use genai::chat::ChatRequest;

use crate::logging::Logger;
use crate::types::ChatMessage;

use super::error::{ProviderError, ProviderResult};
use super::genai_adapter::{
    create_client, from_genai_response, to_genai_messages, to_genai_tools, ProviderConfig,
};
use super::traits::{ChatOptions, Provider, ProviderModelConfig};

/// Unified provider using genai for all supported LLM APIs
pub struct GenaiProvider {
    /// Provider identifier
    provider_id: String,
    /// Logger for debug output
    logger: Arc<dyn Logger>,
}

impl GenaiProvider {
    /// Create a new GenaiProvider
    pub fn new(provider_id: impl Into<String>, logger: Arc<dyn Logger>) -> Self {
        Self {
            provider_id: provider_id.into(),
            logger,
        }
    }
}

#[async_trait]
impl Provider for GenaiProvider {
    fn name(&self) -> &str {
        &self.provider_id
    }

    async fn chat(
        &self,
        messages: &[ChatMessage],
        model_config: &ProviderModelConfig,
        options: &ChatOptions,
    ) -> ProviderResult<ChatMessage> {
        let tool_count = options.tools.as_ref().map_or(0, Vec::len);
        self.logger.info(&format!(
            "[GenaiProvider] chat: provider={}, model={}, messages={}, tools={}",
            self.provider_id,
            model_config.model,
            messages.len(),
            tool_count
        ));

        let config = ProviderConfig::new(self.provider_id.clone(), model_config);
        let client = create_client(&config);

        let mut chat_req = ChatRequest::new(to_genai_messages(messages)?);

        // An empty tools array is rejected by OpenAI-style APIs
        if let Some(tools) = options.tools.as_deref().filter(|t| !t.is_empty()) {
            chat_req = chat_req.with_tools(to_genai_tools(tools));
        }

        let response = client
            .exec_chat(&model_config.model, chat_req, None)
            .await
            .map_err(|e| {
                self.logger.error(&format!("[GenaiProvider] Request failed: {}", e));
                ProviderError::request(&self.provider_id, e.to_string())
            })?;

        let message = from_genai_response(&response);
        self.logger.debug(&format!(
            "[GenaiProvider] Response: {} tool call(s), text={}",
            message.tool_calls().len(),
            message.joined_text().is_some()
        ));

        Ok(message)
    }
}
