//! MCP Client using the official rmcp SDK
//!
//! Launches the tool server as a child process and speaks MCP over its
//! stdin/stdout.

use std::sync::Arc;

use async_trait::async_trait;
use rmcp::{
    ServiceExt,
    model::{
        CallToolRequestParams, CallToolResult, ClientCapabilities, ClientInfo, Implementation,
        RawContent, Tool as RmcpTool,
    },
    service::RunningService,
    transport::TokioChildProcess,
    RoleClient,
};
use serde_json::Value;
use thiserror::Error;
use tokio::process::Command;

use crate::config::ServerLaunchConfig;
use crate::logging::Logger;
use crate::types::{Tool, ToolArguments, ToolOutput};

use super::traits::ToolSource;

/// MCP client errors
#[derive(Error, Debug)]
pub enum McpError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Initialization failed: {0}")]
    InitializationFailed(String),

    #[error("Tool call failed: {0}")]
    ToolCallFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Connection already closed")]
    Closed,
}

pub type McpResult<T> = Result<T, McpError>;

/// MCP client for a tool server running as a child process
pub struct McpClient {
    /// The underlying rmcp running service; `None` once closed
    client: Option<RunningService<RoleClient, ClientInfo>>,
    /// Logger
    logger: Arc<dyn Logger>,
}

fn client_info() -> ClientInfo {
    ClientInfo {
        meta: None,
        protocol_version: Default::default(),
        capabilities: ClientCapabilities::default(),
        client_info: Implementation {
            name: "mcpchat".to_string(),
            title: Some("mcpchat".to_string()),
            version: env!("CARGO_PKG_VERSION").to_string(),
            website_url: None,
            icons: None,
        },
    }
}

impl McpClient {
    /// Spawn the server process and complete the MCP handshake
    ///
    /// The child inherits this process's environment, extended by
    /// `config.env`. Arguments are passed verbatim and in order.
    pub async fn connect_stdio(
        config: &ServerLaunchConfig,
        logger: Arc<dyn Logger>,
    ) -> McpResult<Self> {
        // Arguments may carry API keys, so only their count is logged
        logger.info(&format!(
            "[McpClient] Launching '{}' with {} argument(s)",
            config.command,
            config.args.len()
        ));

        let mut command = Command::new(&config.command);
        command.args(&config.args).envs(&config.env);

        let transport = TokioChildProcess::new(command).map_err(|e| {
            McpError::ConnectionFailed(format!("failed to start '{}': {}", config.command, e))
        })?;

        let client = client_info()
            .serve(transport)
            .await
            .map_err(|e| McpError::InitializationFailed(e.to_string()))?;

        logger.info("[McpClient] Connected and initialized successfully");

        let connected = Self {
            client: Some(client),
            logger,
        };
        if let Some(info) = connected.server_info() {
            connected.logger.info(&format!(
                "[McpClient] Server: {} {}",
                info.name, info.version
            ));
        }
        Ok(connected)
    }

    fn service(&self) -> McpResult<&RunningService<RoleClient, ClientInfo>> {
        self.client.as_ref().ok_or(McpError::Closed)
    }

    /// Get server info
    pub fn server_info(&self) -> Option<&Implementation> {
        self.client
            .as_ref()
            .and_then(|c| c.peer_info())
            .map(|info| &info.server_info)
    }
}

/// Convert an rmcp tool into our descriptor
pub fn tool_from_rmcp(tool: &RmcpTool) -> Tool {
    Tool {
        name: tool.name.to_string(),
        description: tool
            .description
            .as_ref()
            .map(|s| s.to_string())
            .unwrap_or_default(),
        input_schema: Some(Value::Object(tool.input_schema.as_ref().clone())),
    }
}

/// Flatten a tool result into text
///
/// Text parts are joined with newlines; any other content (images,
/// resources) is rendered as its JSON form.
pub fn output_from_result(result: &CallToolResult) -> ToolOutput {
    let content = result
        .content
        .iter()
        .map(|c| match &c.raw {
            RawContent::Text(t) => t.text.clone(),
            other => serde_json::to_string(other).unwrap_or_default(),
        })
        .collect::<Vec<_>>()
        .join("\n");

    ToolOutput {
        content,
        is_error: result.is_error.unwrap_or(false),
    }
}

#[async_trait]
impl ToolSource for McpClient {
    async fn list_tools(&self) -> McpResult<Vec<Tool>> {
        let result = self
            .service()?
            .list_tools(Default::default())
            .await
            .map_err(|e| McpError::Protocol(e.to_string()))?;

        self.logger.info(&format!(
            "[McpClient] Listed {} tools",
            result.tools.len()
        ));

        Ok(result.tools.iter().map(tool_from_rmcp).collect())
    }

    async fn call_tool(&self, name: &str, arguments: ToolArguments) -> McpResult<ToolOutput> {
        self.logger.info(&format!("[McpClient] Calling tool: {}", name));

        let params = CallToolRequestParams {
            meta: None,
            name: name.to_owned().into(),
            arguments: Some(arguments),
            task: None,
        };

        let result = self
            .service()?
            .call_tool(params)
            .await
            .map_err(|e| McpError::ToolCallFailed(e.to_string()))?;

        let output = output_from_result(&result);
        if output.is_error {
            self.logger.warn(&format!("[McpClient] Tool '{}' reported an error", name));
        }
        Ok(output)
    }

    async fn close(&mut self) -> McpResult<()> {
        let Some(client) = self.client.take() else {
            return Ok(());
        };

        self.logger.info("[McpClient] Closing connection");
        client
            .cancel()
            .await
            .map_err(|e| McpError::Protocol(e.to_string()))?;
        Ok(())
    }
}
