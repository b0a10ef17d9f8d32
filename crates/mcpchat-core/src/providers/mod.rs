//! LLM Provider implementations
//!
//! All real providers go through the `genai` crate, which handles the
//! provider-specific protocols and tool calling. Services that speak the
//! OpenAI protocol but are not native to genai (OpenRouter, Mistral) are
//! routed with genai's `ServiceTargetResolver`.
//!
//! The `MockProvider` is kept for testing purposes.

mod traits;
mod error;
mod genai_adapter;
mod genai_provider;
mod mock;

pub use traits::{Provider, ProviderModelConfig, ChatOptions};
pub use error::{ProviderError, ProviderResult};

pub use genai_provider::GenaiProvider;

pub use mock::{MockProvider, MockMode, MockReply, RecordedRequest};

use crate::logging::Logger;
use std::sync::Arc;

/// Create a provider for the given provider ID
///
/// `mock` gives an echoing `MockProvider`; every other id goes to
/// `GenaiProvider`, where ids genai does not know fall back to its own
/// model-name based adapter selection.
pub fn create_provider(provider_id: &str, logger: Arc<dyn Logger>) -> Box<dyn Provider> {
    match provider_id.to_lowercase().as_str() {
        "mock" => Box::new(MockProvider::echo(logger)),
        id => Box::new(GenaiProvider::new(id, logger)),
    }
}
