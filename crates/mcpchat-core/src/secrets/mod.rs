//! Secret lookup
//!
//! API keys and the model id come from the process environment or a `.env`
//! file. `ChainSecretStore::standard()` checks them in that order.

mod traits;
mod env_store;
mod dotenv_store;
mod memory_store;
mod chain_store;

pub use traits::{SecretStore, SecretStoreError, SecretStoreResult};
pub use env_store::EnvSecretStore;
pub use dotenv_store::DotenvSecretStore;
pub use memory_store::MemorySecretStore;
pub use chain_store::ChainSecretStore;
