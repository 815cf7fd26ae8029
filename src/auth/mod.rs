pub mod providers;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{PilotError, Result};
use providers::Provider;

/// Value shipped in sample `.env` files; never a real key.
pub const PLACEHOLDER_KEY: &str = "YOUR_OPENROUTER_API_KEY";

/// On-disk representation of auth.json
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
pub struct AuthStore {
    #[serde(default)]
    pub providers: HashMap<String, ProviderCredential>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ProviderCredential {
    #[serde(rename = "type")]
    pub cred_type: String,
    pub key: String,
}

impl ProviderCredential {
    pub fn api_key(key: impl Into<String>) -> Self {
        Self {
            cred_type: "api".to_string(),
            key: key.into(),
        }
    }
}

impl AuthStore {
    /// Path to auth.json
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PilotError::Auth("Could not determine config directory".into()))?;
        Ok(config_dir.join("promptpilot").join("auth.json"))
    }

    /// Load from the default location, returning default if the file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        let store: AuthStore = serde_json::from_str(&data)?;
        Ok(store)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save with 0600 permissions
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, &data)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    pub fn get(&self, provider: Provider) -> Option<&ProviderCredential> {
        self.providers.get(&provider.to_string())
    }

    pub fn set(&mut self, provider: Provider, cred: ProviderCredential) {
        self.providers.insert(provider.to_string(), cred);
    }

    pub fn remove(&mut self, provider: Provider) -> bool {
        self.providers.remove(&provider.to_string()).is_some()
    }
}

/// Where a resolved key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Env,
    AuthFile,
}

impl std::fmt::Display for KeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeySource::Env => write!(f, "env var"),
            KeySource::AuthFile => write!(f, "auth.json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKey {
    pub key: String,
    pub source: KeySource,
}

/// Empty strings and the sample placeholder don't count as credentials.
pub fn is_usable_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && key != PLACEHOLDER_KEY
}

/// Resolve the API key for `provider`: env var > auth.json.
pub fn resolve_api_key(provider: Provider) -> Result<Option<ResolvedKey>> {
    let store = AuthStore::load()?;
    let env_value = std::env::var(provider.env_var_name()).ok();
    Ok(resolve_from(provider, env_value, &store))
}

fn resolve_from(
    provider: Provider,
    env_value: Option<String>,
    store: &AuthStore,
) -> Option<ResolvedKey> {
    env_value
        .filter(|k| is_usable_key(k))
        .map(|key| ResolvedKey {
            key: key.trim().to_string(),
            source: KeySource::Env,
        })
        .or_else(|| {
            store
                .get(provider)
                .filter(|c| is_usable_key(&c.key))
                .map(|c| ResolvedKey {
                    key: c.key.trim().to_string(),
                    source: KeySource::AuthFile,
                })
        })
}

/// Show enough of a key to recognise it, never the whole thing.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 12 {
        let head: String = chars[..8].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with(key: &str) -> AuthStore {
        let mut store = AuthStore::default();
        store.set(Provider::OpenRouter, ProviderCredential::api_key(key));
        store
    }

    #[test]
    fn env_takes_precedence_over_file() {
        let store = store_with("sk-or-v1-from-file");
        let resolved =
            resolve_from(Provider::OpenRouter, Some("sk-or-v1-from-env".into()), &store).unwrap();
        assert_eq!(resolved.key, "sk-or-v1-from-env");
        assert_eq!(resolved.source, KeySource::Env);
    }

    #[test]
    fn placeholder_env_falls_back_to_file() {
        let store = store_with("sk-or-v1-from-file");
        let resolved =
            resolve_from(Provider::OpenRouter, Some(PLACEHOLDER_KEY.into()), &store).unwrap();
        assert_eq!(resolved.source, KeySource::AuthFile);
    }

    #[test]
    fn nothing_usable_resolves_to_none() {
        let store = store_with("   ");
        assert_eq!(resolve_from(Provider::OpenRouter, Some(String::new()), &store), None);
        assert_eq!(resolve_from(Provider::OpenRouter, None, &AuthStore::default()), None);
    }

    #[test]
    fn save_and_load_round_trip_with_owner_only_permissions() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("promptpilot").join("auth.json");

        store_with("sk-or-v1-abcdef").save_to(&path).unwrap();
        let loaded = AuthStore::load_from(&path).unwrap();
        assert_eq!(loaded.get(Provider::OpenRouter).unwrap().key, "sk-or-v1-abcdef");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[test]
    fn missing_file_loads_empty_store() {
        let tmp = TempDir::new().unwrap();
        let store = AuthStore::load_from(&tmp.path().join("nope.json")).unwrap();
        assert!(store.providers.is_empty());
    }

    #[test]
    fn remove_reports_whether_anything_was_stored() {
        let mut store = store_with("sk-or-v1-abcdef");
        assert!(store.remove(Provider::OpenRouter));
        assert!(!store.remove(Provider::OpenRouter));
    }

    #[test]
    fn masking_hides_the_middle() {
        assert_eq!(mask_key("sk-or-v1-0123456789abcd"), "sk-or-v1...abcd");
        assert_eq!(mask_key("short"), "****");
    }
}
