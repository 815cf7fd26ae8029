use std::time::Duration;

use crate::auth;
use crate::auth::providers::Provider;
use crate::auth::ResolvedKey;
use crate::error::{PilotError, Result};
use crate::llm::client::DEFAULT_TIMEOUT;
use crate::llm::registry::{ModelRegistry, ResolvedModel};

/// Replaces the endpoint of every registered model.
pub const ENDPOINT_ENV: &str = "PROMPTPILOT_ENDPOINT";
/// Request timeout in whole seconds.
pub const TIMEOUT_ENV: &str = "PROMPTPILOT_TIMEOUT_SECS";

/// Everything the remote-facing commands need, built once in `main`.
#[derive(Debug, Clone)]
pub struct Config {
    pub registry: ModelRegistry,
    /// OpenRouter credential, if one could be found
    pub api_key: Option<ResolvedKey>,
    pub timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        let api_key = auth::resolve_api_key(Provider::OpenRouter)?;
        let timeout = parse_timeout(std::env::var(TIMEOUT_ENV).ok().as_deref())?;

        match &api_key {
            Some(resolved) => tracing::info!(
                source = %resolved.source,
                key = %auth::mask_key(&resolved.key),
                "resolved OpenRouter API key"
            ),
            None => tracing::warn!("API key not set for {}", Provider::OpenRouter.display_name()),
        }

        Ok(Config {
            registry: registry_from_env(),
            api_key,
            timeout,
        })
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_ref()
            .map(|k| k.key.as_str())
            .ok_or(PilotError::MissingApiKey)
    }

    /// Look up `model` and attach the credential.
    pub fn resolve_model(&self, model: &str) -> Result<ResolvedModel> {
        let spec = self.registry.get(model)?;
        let key = self.require_api_key()?;
        self.registry.resolve(spec.id, key)
    }
}

/// The model table with any `PROMPTPILOT_ENDPOINT` override applied. Needs no
/// credentials, so listing models works even when auth.json is unreadable.
pub fn registry_from_env() -> ModelRegistry {
    ModelRegistry::default().with_endpoint_override(std::env::var(ENDPOINT_ENV).ok())
}

fn parse_timeout(raw: Option<&str>) -> Result<Duration> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(DEFAULT_TIMEOUT),
        Some(s) => match s.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
            _ => Err(PilotError::Config(format!(
                "{} must be a positive number of seconds, got '{}'",
                TIMEOUT_ENV, s
            ))),
        },
    }
}
