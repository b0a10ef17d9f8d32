//! Core types for LLM interactions
//!
//! This module contains the shared message and tool types used by the
//! providers, the MCP client and the chat session.

mod message;
mod tool;

pub use message::{ChatMessage, ContentPart, MessageRole, MessageContent};
pub use tool::{Tool, ToolArguments, ToolCall, ToolOutput, ToolDeclaration, FunctionDeclaration, DeclarationKind};
