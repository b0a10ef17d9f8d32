//! Chat orchestration
//!
//! `ChatSession` owns the history and drives one query cycle at a time:
//! user message, model call with the current tools, at most one tool
//! invocation, and a follow-up model call. `repl::run` feeds it lines from
//! an async reader.

mod conversation;
mod error;
pub mod repl;
mod session;

pub use conversation::Conversation;
pub use error::{ChatError, ChatResult};
pub use repl::{PROMPT, QUIT_COMMAND};
pub use session::ChatSession;
