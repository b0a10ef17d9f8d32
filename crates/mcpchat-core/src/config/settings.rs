//! Resolved session settings
//!
//! Combines the optional config file with secrets (environment, `.env`).
//! Without a config file the result reproduces the stock setup: an
//! OpenRouter model chosen by `MODEL`, keyed by `OPENAI_API_KEY`, talking to
//! the LaunchDarkly MCP server launched through `npx`.

use std::collections::BTreeMap;

use crate::providers::ProviderModelConfig;
use crate::secrets::SecretStore;

use super::file::{ConfigFile, ServerSection};
use super::traits::{ConfigError, ConfigResult};

/// Provider used when the config file does not name one
pub const DEFAULT_PROVIDER: &str = "openrouter";
/// Secret holding the model API key
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Secret holding the model id
pub const MODEL_VAR: &str = "MODEL";
/// Secret forwarded to the default tool server
pub const SERVER_KEY_VAR: &str = "LD_API_KEY";

/// How to launch the tool server process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerLaunchConfig {
    /// Executable name or path
    pub command: String,
    /// Arguments, passed verbatim and in order
    pub args: Vec<String>,
    /// Variables added to the inherited environment
    pub env: BTreeMap<String, String>,
}

impl ServerLaunchConfig {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            env: BTreeMap::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// The LaunchDarkly MCP server, started through `npx`
    pub fn launchdarkly_section() -> ServerSection {
        ServerSection {
            command: "npx".to_string(),
            args: ["-y", "--package", "@launchdarkly/mcp-server", "--", "mcp", "start", "--api-key"]
                .into_iter()
                .map(String::from)
                .chain(std::iter::once(format!("${{{}}}", SERVER_KEY_VAR)))
                .collect(),
            env: BTreeMap::new(),
        }
    }

    /// Expand placeholders in a server section
    pub fn from_section(section: &ServerSection, secrets: &dyn SecretStore) -> ConfigResult<Self> {
        let args = section
            .args
            .iter()
            .map(|arg| expand_placeholders(arg, secrets))
            .collect::<ConfigResult<Vec<_>>>()?;
        let env = section
            .env
            .iter()
            .map(|(k, v)| Ok((k.clone(), expand_placeholders(v, secrets)?)))
            .collect::<ConfigResult<BTreeMap<_, _>>>()?;

        Ok(Self {
            command: section.command.clone(),
            args,
            env,
        })
    }
}

/// Everything needed to start a chat session
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Provider id handed to `create_provider`
    pub provider: String,
    /// Model id, key and endpoint
    pub model: ProviderModelConfig,
    /// Tool server to launch
    pub server: ServerLaunchConfig,
}

impl ChatConfig {
    /// Resolve the config file against the secret sources
    ///
    /// `MODEL` from the secrets takes precedence over `model.id` in the file.
    pub fn resolve(file: &ConfigFile, secrets: &dyn SecretStore) -> ConfigResult<Self> {
        let provider = file
            .model
            .provider
            .clone()
            .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());

        let model_id = secrets
            .get(MODEL_VAR)
            .or_else(|| file.model.id.clone())
            .ok_or_else(|| ConfigError::MissingValue(MODEL_VAR.to_string()))?;

        let key_var = file.model.api_key_var.as_deref().unwrap_or(API_KEY_VAR);
        let api_key = secrets
            .get(key_var)
            .ok_or_else(|| ConfigError::MissingValue(key_var.to_string()))?;

        let mut model = ProviderModelConfig::new(model_id).with_api_key(api_key);
        if let Some(base) = &file.model.api_base {
            model = model.with_api_base(base.clone());
        }

        let server = match &file.server {
            Some(section) => ServerLaunchConfig::from_section(section, secrets)?,
            None => ServerLaunchConfig::from_section(&ServerLaunchConfig::launchdarkly_section(), secrets)?,
        };

        Ok(Self {
            provider,
            model,
            server,
        })
    }
}

/// Replace `${NAME}` (and `$NAME`) with the secret `NAME`
///
/// Text without placeholders is returned unchanged. A name with no secret
/// behind it is `ConfigError::MissingValue`.
pub fn expand_placeholders(input: &str, secrets: &dyn SecretStore) -> ConfigResult<String> {
    shellexpand::env_with_context(input, |name| secrets.get(name).map(Some).ok_or(()))
        .map(|expanded| expanded.into_owned())
        .map_err(|e| ConfigError::MissingValue(e.var_name))
}
