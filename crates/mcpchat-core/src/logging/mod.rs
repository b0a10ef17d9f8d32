//! Logging abstractions
//!
//! Components take an `Arc<dyn Logger>` and prefix their messages with the
//! component name (`[McpClient]`, `[ChatSession]`, ...). The binary picks the
//! implementation; tests use `NoOpLogger`.

mod traits;
mod noop;
mod console;
pub mod file_logger;

pub use traits::Logger;
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;

pub use file_logger::{
    log, trace, debug, info, warn, error, is_enabled,
    log_file_path, clear_log, FileLogger, LogLevel,
};
