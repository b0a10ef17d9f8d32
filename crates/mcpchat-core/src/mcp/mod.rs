//! MCP (Model Context Protocol) client module
//!
//! Uses the official rmcp SDK to launch a tool server as a child process
//! and talk to it over stdio.
//!
//! # Example
//!
//! ```rust,ignore
//! use mcpchat_core::mcp::{McpClient, ToolSource};
//! use mcpchat_core::config::ServerLaunchConfig;
//! use std::sync::Arc;
//!
//! let config = ServerLaunchConfig::new("npx").with_args(["-y", "some-mcp-server"]);
//! let mut client = McpClient::connect_stdio(&config, Arc::new(NoOpLogger)).await?;
//!
//! let tools = client.list_tools().await?;
//! let output = client.call_tool("lookup", serde_json::Map::new()).await?;
//! client.close().await?;
//! ```

mod client;
mod mock;
mod traits;

pub use client::{output_from_result, tool_from_rmcp, McpClient, McpError, McpResult};
pub use mock::{MockToolSource, RecordedCall};
pub use traits::ToolSource;
