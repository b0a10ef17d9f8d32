//! YAML configuration file
//!
//! Looked up at `$MCPCHAT_CONFIG`, else `<config dir>/mcpchat/config.yaml`.
//! Every section is optional; a missing file means "use the defaults".

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::traits::{ConfigError, ConfigResult};

/// Environment variable that points at an explicit config file
pub const CONFIG_PATH_ENV: &str = "MCPCHAT_CONFIG";

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    /// Model API settings
    #[serde(default)]
    pub model: ModelSection,

    /// Tool server launch settings; defaults to the LaunchDarkly MCP server
    #[serde(default)]
    pub server: Option<ServerSection>,
}

/// `model:` section
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ModelSection {
    /// Provider id (e.g. "openrouter", "openai", "anthropic")
    pub provider: Option<String>,
    /// Model id used when `MODEL` is not set
    pub id: Option<String>,
    /// Custom API base URL
    pub api_base: Option<String>,
    /// Name of the secret holding the API key (default `OPENAI_API_KEY`)
    pub api_key_var: Option<String>,
}

/// `server:` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerSection {
    /// Executable to launch
    pub command: String,
    /// Arguments, in order; `${NAME}` placeholders are expanded from secrets
    #[serde(default)]
    pub args: Vec<String>,
    /// Extra environment for the child process
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl ConfigFile {
    /// Parse YAML content
    pub fn from_yaml(content: &str, origin: &Path) -> ConfigResult<Self> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load a config file; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        // An empty file parses as YAML null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_yaml(&content, path)
    }

    /// Load from `$MCPCHAT_CONFIG` or the user config directory
    pub fn load_default() -> ConfigResult<Self> {
        Self::load(default_path())
    }
}

/// Where the config file is looked up
pub fn default_path() -> PathBuf {
    if let Some(explicit) = std::env::var_os(CONFIG_PATH_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(explicit);
    }
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
    config_dir.join("mcpchat").join("config.yaml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = ConfigFile::load(dir.path().join("config.yaml")).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "\n").unwrap();
        assert_eq!(ConfigFile::load(&path).unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_full_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            r#"
model:
  provider: openai
  id: gpt-4o-mini
  api_key_var: MY_KEY
server:
  command: python
  args: ["./my_server.py", "--token", "${TOKEN}"]
  env:
    DEBUG: "1"
"#,
        )
        .unwrap();

        let config = ConfigFile::load(&path).unwrap();
        assert_eq!(config.model.provider.as_deref(), Some("openai"));
        assert_eq!(config.model.id.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(config.model.api_key_var.as_deref(), Some("MY_KEY"));
        assert_eq!(config.model.api_base, None);

        let server = config.server.unwrap();
        assert_eq!(server.command, "python");
        assert_eq!(server.args, vec!["./my_server.py", "--token", "${TOKEN}"]);
        assert_eq!(server.env.get("DEBUG").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "server: [unclosed").unwrap();

        assert!(matches!(
            ConfigFile::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
