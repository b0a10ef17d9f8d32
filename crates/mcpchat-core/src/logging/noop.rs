//! Silent logger
//!
//! Used wherever a session needs an `Arc<dyn Logger>` but nothing should be
//! written, mostly the mock provider and tool source in tests.

use super::traits::Logger;

/// A logger that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new silent logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn debug(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{log_debug, log_error, log_info, log_warn};
    use std::sync::Arc;

    #[test]
    fn test_accepts_tagged_messages_through_trait_object() {
        let logger: Arc<dyn Logger> = Arc::new(NoOpLogger::new());
        log_debug!(logger, "ChatSession", "history has {} messages", 3);
        log_info!(logger, "McpClient", "Listed {} tools", 0);
        log_warn!(logger, "ToolArguments", "falling back to {{}}");
        log_error!(logger, "GenaiProvider", "request failed: {}", "timeout");
    }
}
