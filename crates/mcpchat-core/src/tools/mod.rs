//! Tool plumbing between the MCP server and the model
//!
//! - `schema`: MCP tool descriptors to function declarations
//! - `arguments`: the model's argument strings to JSON objects

mod arguments;
mod schema;

pub use arguments::{parse_arguments, try_parse_arguments};
pub use schema::{format_tool, format_tools, SchemaError, SchemaResult};
