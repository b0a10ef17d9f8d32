//! `.env` file secret store

use std::collections::HashMap;
use std::path::Path;

use super::traits::{SecretStore, SecretStoreResult};

/// Secret store backed by a `.env` file
///
/// The file is read once at construction with `dotenvy`, so quoting,
/// escapes, `export` prefixes and inline comments follow the usual `.env`
/// rules. Unlike `dotenvy::dotenv()` nothing is written to the process
/// environment.
#[derive(Debug, Default)]
pub struct DotenvSecretStore {
    values: HashMap<String, String>,
}

impl DotenvSecretStore {
    /// Load `.env` from the current directory
    ///
    /// A missing file yields an empty store.
    pub fn from_current_dir() -> SecretStoreResult<Self> {
        Self::load(".env")
    }

    /// Load a specific file; a missing file yields an empty store
    pub fn load(path: impl AsRef<Path>) -> SecretStoreResult<Self> {
        let values = match dotenvy::from_path_iter(path.as_ref()) {
            Ok(iter) => iter.collect::<Result<HashMap<_, _>, _>>()?,
            Err(e) if e.not_found() => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { values })
    }

    /// Parse `.env` content into key/value pairs
    pub fn parse(content: &str) -> SecretStoreResult<HashMap<String, String>> {
        let values = dotenvy::from_read_iter(content.as_bytes())
            .collect::<Result<HashMap<_, _>, _>>()?;
        Ok(values)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SecretStore for DotenvSecretStore {
    fn name(&self) -> &str {
        "dotenv"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .filter(|v| !v.is_empty())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secrets::SecretStoreError;
    use std::io::Write;

    #[test]
    fn test_parse_lines() {
        let values = DotenvSecretStore::parse(
            "# comment\n\
             OPENAI_API_KEY=sk-123\n\
             export MODEL=\"openai/gpt-4o-mini\"\n\
             LD_API_KEY='api-xyz'\n",
        )
        .unwrap();

        assert_eq!(values.len(), 3);
        assert_eq!(values["OPENAI_API_KEY"], "sk-123");
        assert_eq!(values["MODEL"], "openai/gpt-4o-mini");
        assert_eq!(values["LD_API_KEY"], "api-xyz");
    }

    #[test]
    fn test_inline_comment_and_escape() {
        let values =
            DotenvSecretStore::parse("MODEL=openai/gpt-4o-mini # default model\nK=\"a\\nb\"\n")
                .unwrap();

        assert_eq!(values["MODEL"], "openai/gpt-4o-mini");
        assert_eq!(values["K"], "a\nb");
    }

    #[test]
    fn test_malformed_line_is_an_error() {
        let result = DotenvSecretStore::parse("not a pair\n");
        assert!(matches!(result, Err(SecretStoreError::Dotenv(_))));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "MODEL=test-model # picked for tests").unwrap();
        writeln!(file, "EMPTY=").unwrap();

        let store = DotenvSecretStore::load(file.path()).unwrap();
        assert_eq!(store.name(), "dotenv");
        assert_eq!(store.get("MODEL"), Some("test-model".to_string()));
        assert_eq!(store.get("EMPTY"), None);
        assert_eq!(store.get("MISSING"), None);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = DotenvSecretStore::load(dir.path().join(".env")).unwrap();
        assert!(store.is_empty());
    }
}
