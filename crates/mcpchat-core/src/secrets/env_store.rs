//! Environment variable secret store

use std::env;

use super::traits::SecretStore;

/// Secret store that reads the process environment
///
/// Keys are looked up verbatim first, then upper-cased, so `openai_api_key`
/// and `OPENAI_API_KEY` resolve the same variable.
///
/// # Example
///
/// ```
/// use mcpchat_core::secrets::{SecretStore, EnvSecretStore};
///
/// let store = EnvSecretStore::new();
/// let key = store.get("OPENAI_API_KEY");
/// ```
#[derive(Debug, Default)]
pub struct EnvSecretStore {
    _private: (),
}

impl EnvSecretStore {
    /// Create a new environment variable secret store
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn lookup(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.is_empty())
    }
}

impl SecretStore for EnvSecretStore {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &str) -> Option<String> {
        Self::lookup(key).or_else(|| {
            let upper = key.to_uppercase();
            if upper != key {
                Self::lookup(&upper)
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_store_name() {
        let store = EnvSecretStore::new();
        assert_eq!(store.name(), "env");
    }

    #[test]
    fn test_env_store_get_direct() {
        env::set_var("MCPCHAT_TEST_SECRET_DIRECT", "test_value");

        let store = EnvSecretStore::new();
        assert_eq!(
            store.get("MCPCHAT_TEST_SECRET_DIRECT"),
            Some("test_value".to_string())
        );
        assert_eq!(
            store.get("mcpchat_test_secret_direct"),
            Some("test_value".to_string())
        );

        env::remove_var("MCPCHAT_TEST_SECRET_DIRECT");
    }

    #[test]
    fn test_env_store_empty_is_missing() {
        env::set_var("MCPCHAT_TEST_SECRET_EMPTY", "");

        let store = EnvSecretStore::new();
        assert_eq!(store.get("MCPCHAT_TEST_SECRET_EMPTY"), None);

        env::remove_var("MCPCHAT_TEST_SECRET_EMPTY");
    }

    #[test]
    fn test_env_store_source() {
        env::set_var("MCPCHAT_TEST_SECRET_INFO", "value");

        let store = EnvSecretStore::new();
        assert_eq!(store.source("MCPCHAT_TEST_SECRET_INFO"), Some("env"));
        assert_eq!(store.source("MCPCHAT_TEST_NONEXISTENT_XYZ"), None);

        env::remove_var("MCPCHAT_TEST_SECRET_INFO");
    }
}
