//! Conversation orchestrator
//!
//! One `ChatSession` per process. Each query refreshes the tool list,
//! asks the model, runs at most one requested tool and asks the model
//! again with the tool's output.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::config::ChatConfig;
use crate::logging::Logger;
use crate::{log_debug, log_error, log_info, log_warn};
use crate::mcp::{McpClient, ToolSource};
use crate::providers::{create_provider, ChatOptions, Provider, ProviderModelConfig};
use crate::tools::{format_tools, try_parse_arguments};
use crate::types::{ChatMessage, ToolCall};

use super::conversation::Conversation;
use super::error::ChatResult;
use super::repl;

/// A chat session bound to one model and one tool server
pub struct ChatSession {
    conversation: Conversation,
    provider: Box<dyn Provider>,
    tools: Box<dyn ToolSource>,
    model: ProviderModelConfig,
    logger: Arc<dyn Logger>,
}

impl ChatSession {
    /// Create a session from already constructed parts
    pub fn new(
        provider: Box<dyn Provider>,
        tools: Box<dyn ToolSource>,
        model: ProviderModelConfig,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            conversation: Conversation::new(),
            provider,
            tools,
            model,
            logger,
        }
    }

    /// Build the provider and launch the tool server described by `config`
    pub async fn connect(config: &ChatConfig, logger: Arc<dyn Logger>) -> ChatResult<Self> {
        let provider = create_provider(&config.provider, logger.clone());
        let client = McpClient::connect_stdio(&config.server, logger.clone()).await?;

        Ok(Self::new(
            provider,
            Box::new(client),
            config.model.clone(),
            logger,
        ))
    }

    /// History so far
    pub fn history(&self) -> &Conversation {
        &self.conversation
    }

    /// Names of the tools the server currently offers
    pub async fn tool_names(&self) -> ChatResult<Vec<String>> {
        let tools = self.tools.list_tools().await?;
        Ok(tools.into_iter().map(|t| t.name).collect())
    }

    /// Run one query cycle and return the text to show the user
    pub async fn process_query(&mut self, query: &str) -> ChatResult<String> {
        self.conversation.push(ChatMessage::user(query));

        let declarations = format_tools(&self.tools.list_tools().await?)?;
        log_debug!(
            self.logger,
            "ChatSession",
            "Query with {} tool(s), history={}",
            declarations.len(),
            self.conversation.len()
        );

        let options = ChatOptions::new().with_tools(declarations);
        let response = self
            .provider
            .chat(self.conversation.messages(), &self.model, &options)
            .await?;

        let first_call = response.tool_calls().first().map(|call| (*call).clone());
        let text = response.joined_text();
        self.conversation.push(response);

        let Some(call) = first_call else {
            return Ok(text.unwrap_or_default());
        };

        self.run_tool_call(&call).await?;

        let follow_up = self
            .provider
            .chat(self.conversation.messages(), &self.model, &ChatOptions::new())
            .await?;

        Ok(follow_up.joined_text().unwrap_or_default())
    }

    /// Invoke one tool call and record its result in the history
    async fn run_tool_call(&mut self, call: &ToolCall) -> ChatResult<()> {
        let arguments = try_parse_arguments(&call.arguments).unwrap_or_else(|| {
            log_warn!(
                self.logger,
                "ChatSession",
                "Unusable arguments for '{}', calling with {{}}",
                call.name
            );
            Default::default()
        });

        log_info!(self.logger, "ChatSession", "Calling tool '{}' ({})", call.name, call.id);
        let output = self.tools.call_tool(&call.name, arguments).await?;

        self.conversation
            .push(ChatMessage::tool_result(&call.id, &call.name, output.content));
        Ok(())
    }

    /// Run the interactive loop, then close the tool connection
    ///
    /// The connection is closed exactly once however the loop ends. A loop
    /// error is returned in preference to a close error.
    pub async fn run_until_quit<R, W>(mut self, input: R, output: W) -> ChatResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let loop_result = repl::run(&mut self, input, output).await;
        if let Err(e) = &loop_result {
            log_error!(self.logger, "ChatSession", "Session ended with error: {}", e);
        }

        let close_result = self.close().await;
        loop_result?;
        close_result
    }

    /// Close the tool connection, consuming the session
    pub async fn close(mut self) -> ChatResult<()> {
        self.logger.debug("[ChatSession] Closing tool connection");
        self.tools.close().await?;
        Ok(())
    }
}
