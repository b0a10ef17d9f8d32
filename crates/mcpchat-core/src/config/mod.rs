//! Configuration
//!
//! - `ConfigFile`: optional YAML file (model and tool server sections)
//! - `ChatConfig`: the file resolved against secrets (environment, `.env`)

mod traits;
mod file;
mod settings;

pub use traits::{ConfigError, ConfigResult};
pub use file::{default_path, ConfigFile, ModelSection, ServerSection, CONFIG_PATH_ENV};
pub use settings::{
    expand_placeholders, ChatConfig, ServerLaunchConfig,
    API_KEY_VAR, DEFAULT_PROVIDER, MODEL_VAR, SERVER_KEY_VAR,
};
