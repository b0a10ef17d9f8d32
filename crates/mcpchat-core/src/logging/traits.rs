//! Logger trait definition

/// Logger abstraction shared by every component of a chat session
///
/// Implementations:
/// - `NoOpLogger`: Silent logger for tests
/// - `ConsoleLogger`: Logs to stderr so stdout stays free for the chat
/// - `FileLogger`: Appends to the debug log file
pub trait Logger: Send + Sync {
    /// Log a debug message
    fn debug(&self, message: &str);

    /// Log an info message
    fn info(&self, message: &str);

    /// Log a warning message
    fn warn(&self, message: &str);

    /// Log an error message
    fn error(&self, message: &str);
}

/// Log a `format!` message tagged with a component name
///
/// `log_info!(logger, "McpClient", "Listed {} tools", n)` logs
/// `[McpClient] Listed 3 tools`.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $component:literal, $($arg:tt)*) => {
        $logger.debug(&format!(concat!("[", $component, "] {}"), format_args!($($arg)*)))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $component:literal, $($arg:tt)*) => {
        $logger.info(&format!(concat!("[", $component, "] {}"), format_args!($($arg)*)))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $component:literal, $($arg:tt)*) => {
        $logger.warn(&format!(concat!("[", $component, "] {}"), format_args!($($arg)*)))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $component:literal, $($arg:tt)*) => {
        $logger.error(&format!(concat!("[", $component, "] {}"), format_args!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Capture(Mutex<Vec<String>>);

    impl Logger for Capture {
        fn debug(&self, message: &str) {
            self.0.lock().push(format!("debug:{}", message));
        }
        fn info(&self, message: &str) {
            self.0.lock().push(format!("info:{}", message));
        }
        fn warn(&self, message: &str) {
            self.0.lock().push(format!("warn:{}", message));
        }
        fn error(&self, message: &str) {
            self.0.lock().push(format!("error:{}", message));
        }
    }

    #[test]
    fn test_macros_tag_component() {
        let logger = Capture::default();
        log_info!(logger, "McpClient", "Listed {} tools", 3);
        log_warn!(logger, "ChatSession", "odd");

        let lines = logger.0.lock();
        assert_eq!(
            lines.as_slice(),
            ["info:[McpClient] Listed 3 tools", "warn:[ChatSession] odd"]
        );
    }
}
