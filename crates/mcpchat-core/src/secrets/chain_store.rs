//! Chained secret store with fallback behavior

use std::sync::Arc;

use super::traits::{SecretStore, SecretStoreResult};
use super::{DotenvSecretStore, EnvSecretStore};

/// A secret store that tries several stores in order
///
/// # Example
///
/// ```
/// use mcpchat_core::secrets::{SecretStore, ChainSecretStore, EnvSecretStore, MemorySecretStore};
/// use std::sync::Arc;
///
/// let overrides = Arc::new(MemorySecretStore::with_secrets([("MODEL", "local-model")]));
/// let chain = ChainSecretStore::new(vec![overrides, Arc::new(EnvSecretStore::new())]);
/// assert_eq!(chain.get("MODEL").as_deref(), Some("local-model"));
/// ```
pub struct ChainSecretStore {
    stores: Vec<Arc<dyn SecretStore>>,
}

impl ChainSecretStore {
    /// Create a chain; earlier stores win
    pub fn new(stores: Vec<Arc<dyn SecretStore>>) -> Self {
        Self { stores }
    }

    /// Process environment first, then `.env` in the current directory
    pub fn standard() -> SecretStoreResult<Self> {
        Ok(Self::new(vec![
            Arc::new(EnvSecretStore::new()),
            Arc::new(DotenvSecretStore::from_current_dir()?),
        ]))
    }

    /// Find which store has a key
    pub fn find_store(&self, key: &str) -> Option<&Arc<dyn SecretStore>> {
        self.stores
            .iter()
            .find(|store| store.has(key))
    }
}

impl SecretStore for ChainSecretStore {
    fn name(&self) -> &str {
        "chain"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.stores.iter().find_map(|store| store.get(key))
    }

    fn source(&self, key: &str) -> Option<&str> {
        self.find_store(key).map(|store| store.name())
    }
}
