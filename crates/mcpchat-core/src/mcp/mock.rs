//! Mock tool source for testing
//!
//! Serves a fixed catalogue and answers calls from a per-tool table.
//! Clones share state, so a test can keep a handle after moving another
//! clone into a session.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use super::client::{McpError, McpResult};
use super::traits::ToolSource;
use crate::types::{Tool, ToolArguments, ToolOutput};

/// A call as the mock received it
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub name: String,
    pub arguments: ToolArguments,
}

#[derive(Debug, Default)]
struct MockToolState {
    tools: Mutex<Vec<Tool>>,
    outputs: Mutex<HashMap<String, ToolOutput>>,
    calls: Mutex<Vec<RecordedCall>>,
    list_count: Mutex<usize>,
    close_count: Mutex<usize>,
    closed: Mutex<bool>,
}

/// In-memory [`ToolSource`]
#[derive(Debug, Clone, Default)]
pub struct MockToolSource {
    state: Arc<MockToolState>,
}

impl MockToolSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advertise a tool
    pub fn with_tool(self, tool: Tool) -> Self {
        self.state.tools.lock().push(tool);
        self
    }

    /// Set what a call to `name` returns
    pub fn with_output(self, name: impl Into<String>, output: ToolOutput) -> Self {
        self.state.outputs.lock().insert(name.into(), output);
        self
    }

    /// Replace the advertised catalogue
    pub fn set_tools(&self, tools: Vec<Tool>) {
        *self.state.tools.lock() = tools;
    }

    /// Calls received so far, oldest first
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.calls.lock().clone()
    }

    /// How many times the catalogue was requested
    pub fn list_count(&self) -> usize {
        *self.state.list_count.lock()
    }

    /// How many times `close` was called
    pub fn close_count(&self) -> usize {
        *self.state.close_count.lock()
    }
}

#[async_trait]
impl ToolSource for MockToolSource {
    async fn list_tools(&self) -> McpResult<Vec<Tool>> {
        if *self.state.closed.lock() {
            return Err(McpError::Closed);
        }
        *self.state.list_count.lock() += 1;
        Ok(self.state.tools.lock().clone())
    }

    async fn call_tool(&self, name: &str, arguments: ToolArguments) -> McpResult<ToolOutput> {
        if *self.state.closed.lock() {
            return Err(McpError::Closed);
        }
        self.state.calls.lock().push(RecordedCall {
            name: name.to_string(),
            arguments,
        });

        self.state
            .outputs
            .lock()
            .get(name)
            .cloned()
            .ok_or_else(|| McpError::ToolCallFailed(format!("Unknown tool: {}", name)))
    }

    async fn close(&mut self) -> McpResult<()> {
        *self.state.close_count.lock() += 1;
        *self.state.closed.lock() = true;
        Ok(())
    }
}
