//! Tool source trait

use async_trait::async_trait;

use super::client::McpResult;
use crate::types::{Tool, ToolArguments, ToolOutput};

/// Anything that can advertise and run tools for the chat session
///
/// Implemented by [`McpClient`](super::McpClient) for real servers and by
/// [`MockToolSource`](super::MockToolSource) in tests.
#[async_trait]
pub trait ToolSource: Send + Sync {
    /// Current tool catalogue, in server order
    async fn list_tools(&self) -> McpResult<Vec<Tool>>;

    /// Invoke one tool by name
    async fn call_tool(&self, name: &str, arguments: ToolArguments) -> McpResult<ToolOutput>;

    /// Release the connection. Calling it again is a no-op.
    async fn close(&mut self) -> McpResult<()>;
}
