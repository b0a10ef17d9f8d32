//! Mock provider for testing
//!
//! Deterministic responses without network access. Replies are taken from a
//! script first; once the script is exhausted the fallback mode answers.
//! Every request is recorded so tests can inspect exactly what the model saw.
//!
//! The provider is a cheap handle: clones share the script and the recorded
//! requests, so a test can keep one clone after boxing another into a session.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

use super::error::{ProviderError, ProviderResult};
use super::traits::{ChatOptions, Provider, ProviderModelConfig};
use crate::logging::Logger;
use crate::types::{ChatMessage, MessageRole, ToolCall, ToolDeclaration};

/// What the mock answers once its script runs out
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Echo the last user message back
    Echo,
    /// Return a fixed response
    Fixed(String),
    /// Fail every request
    Error(String),
}

/// One scripted reply
#[derive(Debug, Clone)]
pub enum MockReply {
    Message(ChatMessage),
    Error(String),
}

/// A request as the mock received it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    pub tools: Option<Vec<ToolDeclaration>>,
}

impl RecordedRequest {
    /// Names of the tools offered in this request
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools
            .iter()
            .flatten()
            .map(ToolDeclaration::name)
            .collect()
    }
}

#[derive(Debug)]
struct MockState {
    mode: MockMode,
    script: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Mock LLM provider for testing
#[derive(Clone)]
pub struct MockProvider {
    state: Arc<MockState>,
    logger: Arc<dyn Logger>,
}

impl MockProvider {
    /// Create a mock with the given fallback mode
    pub fn with_mode(mode: MockMode, logger: Arc<dyn Logger>) -> Self {
        Self {
            state: Arc::new(MockState {
                mode,
                script: Mutex::new(VecDeque::new()),
                requests: Mutex::new(Vec::new()),
            }),
            logger,
        }
    }

    /// Create a mock that echoes the last user message
    pub fn echo(logger: Arc<dyn Logger>) -> Self {
        Self::with_mode(MockMode::Echo, logger)
    }

    /// Create a mock that always returns the same text
    pub fn fixed(response: impl Into<String>, logger: Arc<dyn Logger>) -> Self {
        Self::with_mode(MockMode::Fixed(response.into()), logger)
    }

    /// Create a mock that always fails
    pub fn error(message: impl Into<String>, logger: Arc<dyn Logger>) -> Self {
        Self::with_mode(MockMode::Error(message.into()), logger)
    }

    /// Queue a text reply
    pub fn reply_text(self, text: impl Into<String>) -> Self {
        self.push(MockReply::Message(ChatMessage::assistant(text)))
    }

    /// Queue a reply that requests tool calls
    pub fn reply_tool_calls(self, calls: Vec<ToolCall>) -> Self {
        self.push(MockReply::Message(ChatMessage::assistant_with_tool_calls(None, calls)))
    }

    /// Queue a failing reply
    pub fn reply_error(self, message: impl Into<String>) -> Self {
        self.push(MockReply::Error(message.into()))
    }

    /// Queue an arbitrary reply
    pub fn push(self, reply: MockReply) -> Self {
        self.state.script.lock().push_back(reply);
        self
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.state.requests.lock().len()
    }

    fn last_user_message(messages: &[ChatMessage]) -> String {
        messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .and_then(ChatMessage::joined_text)
            .unwrap_or_default()
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn chat(
        &self,
        messages: &[ChatMessage],
        model: &ProviderModelConfig,
        options: &ChatOptions,
    ) -> ProviderResult<ChatMessage> {
        self.state.requests.lock().push(RecordedRequest {
            messages: messages.to_vec(),
            model: model.model.clone(),
            tools: options.tools.clone(),
        });

        let scripted = self.state.script.lock().pop_front();
        match scripted {
            Some(MockReply::Message(message)) => {
                self.logger.debug("MockProvider: scripted reply");
                Ok(message)
            }
            Some(MockReply::Error(message)) => {
                self.logger.debug("MockProvider: scripted error");
                Err(ProviderError::Mock(message.clone()))
            }
            None => match &self.state.mode {
                MockMode::Echo => {
                    let user_msg = Self::last_user_message(messages);
                    self.logger.debug(&format!("MockProvider: Echo mode, echoing: {}", user_msg));
                    Ok(ChatMessage::assistant(format!("Echo: {}", user_msg)))
                }
                MockMode::Fixed(response) => Ok(ChatMessage::assistant(response.clone())),
                MockMode::Error(message) => {
                    Err(ProviderError::Mock(message.clone()))
                }
            },
        }
    }
}
