use crate::auth::providers::Provider;
use crate::error::{PilotError, Result};

/// A model the tool knows how to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelSpec {
    pub id: &'static str,
    pub provider: Provider,
    pub endpoint: &'static str,
    pub max_tokens: u32,
}

/// Static model table. The first entry is the default.
pub const MODELS: &[ModelSpec] = &[ModelSpec {
    id: "meta-llama/llama-3.1-8b-instruct:free",
    provider: Provider::OpenRouter,
    endpoint: "https://openrouter.ai/api/v1/chat/completions",
    max_tokens: 2048,
}];

pub fn default_model() -> &'static str {
    MODELS[0].id
}

/// A model with everything needed to call it.
#[derive(Debug, Clone)]
pub struct ResolvedModel {
    pub id: String,
    pub provider: Provider,
    pub endpoint: String,
    pub max_tokens: u32,
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct ModelRegistry {
    models: &'static [ModelSpec],
    endpoint_override: Option<String>,
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self {
            models: MODELS,
            endpoint_override: None,
        }
    }
}

impl ModelRegistry {
    /// Send every model to `endpoint` instead of its table entry (proxies, local mocks).
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        self.endpoint_override = endpoint.filter(|e| !e.trim().is_empty());
        self
    }

    pub fn models(&self) -> &'static [ModelSpec] {
        self.models
    }

    pub fn endpoint_override(&self) -> Option<&str> {
        self.endpoint_override.as_deref()
    }

    pub fn get(&self, id: &str) -> Result<&'static ModelSpec> {
        self.models
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| PilotError::UnsupportedModel(id.to_string()))
    }

    pub fn resolve(&self, id: &str, api_key: &str) -> Result<ResolvedModel> {
        let spec = self.get(id)?;
        Ok(ResolvedModel {
            id: spec.id.to_string(),
            provider: spec.provider,
            endpoint: self
                .endpoint_override
                .clone()
                .unwrap_or_else(|| spec.endpoint.to_string()),
            max_tokens: spec.max_tokens,
            api_key: api_key.to_string(),
        })
    }
}
