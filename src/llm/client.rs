use std::time::Duration;

use crate::error::{PilotError, Result};
use crate::llm::registry::ResolvedModel;
use crate::llm::Completion;

/// Shown to OpenRouter as the calling application.
const REFERER: &str = "http://localhost:8501";
const APP_TITLE: &str = "PromptPilot";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Prompt sent when checking that a key works.
pub const VALIDATION_PROMPT: &str = "Test prompt to validate API key";

/// OpenRouter chat-completions client for one model
pub struct OpenRouterClient {
    model: String,
    endpoint: String,
    max_tokens: u32,
    api_key: String,
    client: reqwest::Client,
}

impl OpenRouterClient {
    pub fn new(resolved: &ResolvedModel, timeout: Duration) -> Self {
        tracing::info!(
            model = %resolved.id,
            key = %crate::auth::mask_key(&resolved.api_key),
            "initialized OpenRouter client"
        );
        Self {
            model: resolved.id.clone(),
            endpoint: resolved.endpoint.clone(),
            max_tokens: resolved.max_tokens,
            api_key: resolved.api_key.clone(),
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one throwaway request to prove the key is accepted.
    pub async fn validate(&self) -> Result<()> {
        self.complete(VALIDATION_PROMPT).await.map(|_| ())
    }

    fn request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": prompt },
            ],
            "max_tokens": self.max_tokens,
        })
    }
}

impl Completion for OpenRouterClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let body = self.request_body(prompt);
        tracing::debug!(endpoint = %self.endpoint, model = %self.model, "sending completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("HTTP-Referer", REFERER)
            .header("X-Title", APP_TITLE)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!("OpenRouter API error: {}", e))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            tracing::error!("OpenRouter API error: {}", status);
            return Err(PilotError::Unauthorized);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::error!("OpenRouter API error: {} {}", status, text);
            return Err(PilotError::Remote {
                status: status.as_u16(),
                body: text,
            });
        }

        let json: serde_json::Value = response.json().await?;
        let content = extract_content(&json)?;
        tracing::debug!(
            "received response: {}...",
            content.chars().take(50).collect::<String>()
        );
        Ok(content)
    }
}

/// Pull `choices[0].message.content` out of a chat-completions response.
pub fn extract_content(json: &serde_json::Value) -> Result<String> {
    json.get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .map(|s| s.to_string())
        .ok_or(PilotError::EmptyResponse)
}
