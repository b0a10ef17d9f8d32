//! Adapter between mcpchat types and genai types
//!
//! Conversation history is kept in our own `ChatMessage` form and converted
//! on every request, so the chat session never depends on genai directly.

use std::future::Future;
use std::pin::Pin;

use genai::chat::{
    ChatMessage as GenaiMessage, ChatResponse as GenaiResponse,
    Tool as GenaiTool, ToolCall as GenaiToolCall, ToolResponse as GenaiToolResponse,
};
use genai::resolver::{AuthData, AuthResolver, Endpoint, ServiceTargetResolver};
use genai::{adapter::AdapterKind, Client, ModelIden, ServiceTarget};
use serde_json::{json, Value};

use crate::secrets::{EnvSecretStore, SecretStore};
use crate::types::{ChatMessage, ContentPart, MessageContent, MessageRole, ToolCall, ToolDeclaration};

use super::error::{ProviderError, ProviderResult};
use super::traits::ProviderModelConfig;

// ============================================================================
// Message Conversion: mcpchat -> genai
// ============================================================================

fn text_message(role: MessageRole, text: String) -> ProviderResult<GenaiMessage> {
    match role {
        MessageRole::System => Ok(GenaiMessage::system(text)),
        MessageRole::User => Ok(GenaiMessage::user(text)),
        MessageRole::Assistant => Ok(GenaiMessage::assistant(text)),
        MessageRole::Tool => Err(ProviderError::InvalidHistory(
            "tool message without a call id".to_string(),
        )),
    }
}

/// Convert one of our tool calls into genai's form
///
/// The argument string is parsed when it is valid JSON and passed through as
/// a JSON string otherwise, so the model sees back exactly what it produced.
pub fn to_genai_tool_call(call: &ToolCall) -> ProviderResult<GenaiToolCall> {
    let fn_arguments = serde_json::from_str::<Value>(&call.arguments)
        .unwrap_or_else(|_| Value::String(call.arguments.clone()));

    let tool_call = serde_json::from_value(json!({
        "call_id": call.id,
        "fn_name": call.name,
        "fn_arguments": fn_arguments,
    }))?;
    Ok(tool_call)
}

/// Append the genai messages for one of our messages
///
/// An assistant message carrying both text and tool calls becomes a text
/// message followed by a tool-call message; each tool result becomes its own
/// tool response message.
fn push_genai_messages(out: &mut Vec<GenaiMessage>, msg: &ChatMessage) -> ProviderResult<()> {
    match &msg.content {
        MessageContent::Text(text) => out.push(text_message(msg.role, text.clone())?),
        MessageContent::Parts(parts) => {
            let mut texts = Vec::new();
            let mut calls = Vec::new();
            let mut responses = Vec::new();

            for part in parts {
                match part {
                    ContentPart::Text { text } => texts.push(text.as_str()),
                    ContentPart::ToolUse(call) => calls.push(to_genai_tool_call(call)?),
                    ContentPart::ToolResult { tool_use_id, content, .. } => {
                        responses.push(GenaiToolResponse::new(tool_use_id.clone(), content.clone()));
                    }
                }
            }

            if !texts.is_empty() {
                out.push(text_message(msg.role, texts.join("\n"))?);
            }
            if !calls.is_empty() {
                out.push(GenaiMessage::from(calls));
            }
            out.extend(responses.into_iter().map(GenaiMessage::from));
        }
    }
    Ok(())
}

/// Convert a conversation to genai messages
pub fn to_genai_messages(messages: &[ChatMessage]) -> ProviderResult<Vec<GenaiMessage>> {
    let mut out = Vec::with_capacity(messages.len());
    for msg in messages {
        push_genai_messages(&mut out, msg)?;
    }
    Ok(out)
}

// ============================================================================
// Tool Conversion: mcpchat -> genai
// ============================================================================

/// Convert a tool declaration to a genai Tool
pub fn to_genai_tool(decl: &ToolDeclaration) -> GenaiTool {
    GenaiTool::new(decl.function.name.clone())
        .with_description(decl.function.description.clone())
        .with_schema(decl.function.parameters.clone())
}

/// Convert tool declarations to genai tools
pub fn to_genai_tools(decls: &[ToolDeclaration]) -> Vec<GenaiTool> {
    decls.iter().map(to_genai_tool).collect()
}

// ============================================================================
// Response Conversion: genai -> mcpchat
// ============================================================================

/// Convert a genai ToolCall to ours, keeping the arguments as JSON text
pub fn from_genai_tool_call(tc: &GenaiToolCall) -> ToolCall {
    let arguments = match &tc.fn_arguments {
        Value::String(raw) => raw.clone(),
        other => other.to_string(),
    };

    ToolCall {
        id: tc.call_id.clone(),
        name: tc.fn_name.clone(),
        arguments,
    }
}

/// Concatenate every text segment of a reply, `None` when there are none
pub fn join_texts(texts: &[&str]) -> Option<String> {
    if texts.is_empty() {
        None
    } else {
        Some(texts.concat())
    }
}

/// Build our assistant message from reply text and tool calls
pub fn assistant_message(text: Option<String>, tool_calls: Vec<ToolCall>) -> ChatMessage {
    match (text, tool_calls.is_empty()) {
        (Some(text), true) => ChatMessage::assistant(text),
        (text, _) => ChatMessage::assistant_with_tool_calls(text, tool_calls),
    }
}

/// Convert a genai response to a single assistant message
///
/// All text segments are kept, in order.
pub fn from_genai_response(response: &GenaiResponse) -> ChatMessage {
    let text = join_texts(&response.texts());
    let tool_calls: Vec<ToolCall> = response
        .tool_calls()
        .into_iter()
        .map(from_genai_tool_call)
        .collect();

    assistant_message(text, tool_calls)
}

// ============================================================================
// Provider Resolution
// ============================================================================

/// Default OpenRouter endpoint
pub const OPENROUTER_API_BASE: &str = "https://openrouter.ai/api/v1/";
const MISTRAL_API_BASE: &str = "https://api.mistral.ai/v1/";

/// Provider configuration for routing
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Provider identifier (e.g., "openai", "openrouter")
    pub provider: String,
    /// API key for authentication
    pub api_key: Option<String>,
    /// Custom API base URL
    pub api_base: Option<String>,
}

impl ProviderConfig {
    pub fn new(provider: impl Into<String>, model: &ProviderModelConfig) -> Self {
        Self {
            provider: provider.into(),
            api_key: model.api_key.clone(),
            api_base: model.api_base.clone(),
        }
    }
}

/// Environment variable holding the key for a provider
pub fn provider_to_secret_key(provider: &str) -> String {
    match provider.to_lowercase().as_str() {
        // OpenRouter speaks the OpenAI protocol and is commonly keyed that way
        "openrouter" => "OPENAI_API_KEY".to_string(),
        "gemini" | "google" => "GEMINI_API_KEY".to_string(),
        "azure" => "AZURE_OPENAI_API_KEY".to_string(),
        other => format!("{}_API_KEY", other.to_uppercase().replace('-', "_")),
    }
}

/// Create a genai Client with our auth and endpoint resolution
///
/// An explicit key in the config wins; otherwise the provider's environment
/// variable is consulted.
pub fn create_client(config: &ProviderConfig) -> Client {
    let auth_provider = config.provider.clone();
    let auth_explicit_key = config.api_key.clone();

    let auth_resolver = AuthResolver::from_resolver_async_fn(
        move |_model_iden: ModelIden| -> Pin<Box<dyn Future<Output = genai::resolver::Result<Option<AuthData>>> + Send>> {
            let provider = auth_provider.clone();
            let explicit_key = auth_explicit_key.clone();

            Box::pin(async move {
                if let Some(key) = explicit_key {
                    return Ok(Some(AuthData::from_single(key)));
                }

                let env_key = provider_to_secret_key(&provider);
                Ok(EnvSecretStore::new().get(&env_key).map(AuthData::from_single))
            })
        },
    );

    let target_provider = config.provider.to_lowercase();
    let target_api_base = config.api_base.clone();

    let target_resolver = ServiceTargetResolver::from_resolver_fn(
        move |target: ServiceTarget| -> Result<ServiceTarget, genai::resolver::Error> {
            let Some(url) = endpoint_for(&target_provider, target_api_base.as_deref()) else {
                return Ok(target);
            };

            let adapter_kind = if is_openai_compatible(&target_provider) {
                AdapterKind::OpenAI
            } else {
                target.model.adapter_kind
            };
            let model = ModelIden::new(adapter_kind, target.model.model_name.clone());

            Ok(ServiceTarget {
                endpoint: Endpoint::from_owned(url),
                auth: target.auth,
                model,
            })
        },
    );

    Client::builder()
        .with_auth_resolver(auth_resolver)
        .with_service_target_resolver(target_resolver)
        .build()
}

/// OpenAI-protocol services genai has no native adapter for
fn is_openai_compatible(provider: &str) -> bool {
    matches!(provider, "openrouter" | "mistral")
}

/// Endpoint the request is sent to, or `None` to keep genai's default
///
/// An explicit `api_base` always wins.
pub fn endpoint_for(provider: &str, api_base: Option<&str>) -> Option<String> {
    if let Some(base) = api_base {
        return Some(base.to_string());
    }
    match provider.to_lowercase().as_str() {
        "openrouter" => Some(OPENROUTER_API_BASE.to_string()),
        "mistral" => Some(MISTRAL_API_BASE.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genai::chat::ChatRole as GenaiRole;

    #[test]
    fn test_text_message_conversion() {
        let msgs = to_genai_messages(&[ChatMessage::system("be brief"), ChatMessage::user("Hello")]).unwrap();
        assert_eq!(msgs.len(), 2);
        assert!(matches!(msgs[0].role, GenaiRole::System));
        assert!(matches!(msgs[1].role, GenaiRole::User));
    }

    #[test]
    fn test_tool_turn_conversion() {
        let history = vec![
            ChatMessage::user("What's up?"),
            ChatMessage::assistant_with_tool_calls(
                Some("Checking".to_string()),
                vec![ToolCall::new("call_1", "lookup", "{\"x\":1}")],
            ),
            ChatMessage::tool_result("call_1", "lookup", "42"),
        ];

        let msgs = to_genai_messages(&history).unwrap();
        // user, assistant text, assistant tool calls, tool response
        assert_eq!(msgs.len(), 4);
        assert!(matches!(msgs[1].role, GenaiRole::Assistant));
        assert!(matches!(msgs[2].role, GenaiRole::Assistant));
        assert!(matches!(msgs[3].role, GenaiRole::Tool));
    }

    #[test]
    fn test_plain_tool_message_rejected() {
        let msg = ChatMessage {
            role: MessageRole::Tool,
            content: MessageContent::Text("orphan".to_string()),
        };
        assert!(to_genai_messages(&[msg]).is_err());
    }

    #[test]
    fn test_tool_call_arguments_round_trip() {
        let call = ToolCall::new("call_1", "lookup", "{\"x\":1}");
        let genai_call = to_genai_tool_call(&call).unwrap();
        assert_eq!(genai_call.fn_arguments, json!({"x": 1}));
        assert_eq!(from_genai_tool_call(&genai_call), call);

        let broken = ToolCall::new("call_2", "lookup", "{not json");
        let genai_call = to_genai_tool_call(&broken).unwrap();
        assert_eq!(genai_call.fn_arguments, Value::String("{not json".to_string()));
        assert_eq!(from_genai_tool_call(&genai_call).arguments, "{not json");
    }

    #[test]
    fn test_tool_conversion() {
        let decl = ToolDeclaration::function(
            "get_weather",
            "Get weather for a location",
            json!({
                "type": "object",
                "properties": { "location": { "type": "string" } },
                "required": ["location"]
            }),
        );

        let genai_tool = to_genai_tool(&decl);
        assert_eq!(genai_tool.name, "get_weather");
        assert_eq!(to_genai_tools(&[decl.clone(), decl]).len(), 2);
    }

    #[test]
    fn test_secret_key_mapping() {
        assert_eq!(provider_to_secret_key("openrouter"), "OPENAI_API_KEY");
        assert_eq!(provider_to_secret_key("openai"), "OPENAI_API_KEY");
        assert_eq!(provider_to_secret_key("anthropic"), "ANTHROPIC_API_KEY");
        assert_eq!(provider_to_secret_key("google"), "GEMINI_API_KEY");
    }

    #[test]
    fn test_reply_keeps_every_text_segment() {
        assert_eq!(join_texts(&[]), None);
        assert_eq!(join_texts(&["Flags: ", "beta-ui, dark-mode"]).as_deref(), Some("Flags: beta-ui, dark-mode"));

        let msg = assistant_message(join_texts(&["part one, ", "part two"]), vec![]);
        assert_eq!(msg.text(), Some("part one, part two"));

        let with_call = assistant_message(
            join_texts(&["a", "b"]),
            vec![ToolCall::new("call_1", "lookup", "{}")],
        );
        assert_eq!(with_call.joined_text().as_deref(), Some("ab"));
        assert_eq!(with_call.tool_calls().len(), 1);
    }

    #[test]
    fn test_endpoint_resolution() {
        assert_eq!(endpoint_for("openrouter", None).as_deref(), Some("https://openrouter.ai/api/v1/"));
        assert_eq!(endpoint_for("OpenRouter", None).as_deref(), Some(OPENROUTER_API_BASE));
        assert_eq!(
            endpoint_for("openrouter", Some("http://localhost:9000/v1/")).as_deref(),
            Some("http://localhost:9000/v1/")
        );
        assert_eq!(endpoint_for("openai", None), None);
        assert!(is_openai_compatible("mistral"));
        assert!(!is_openai_compatible("openai"));
    }
}
