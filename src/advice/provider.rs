//! Advice Provider
//!
//! The generative-text service behind the primary recommendation path,
//! modelled as a capability so tests can substitute a deterministic stub.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::advice::types::AdviceError;
use crate::config::AdviceConfig;

const SYSTEM_PROMPT: &str = "You are a helpful environmental advisor. Provide practical, \
non-judgmental advice for reducing carbon footprint. Always respond with \
valid JSON containing an array of recommendations.";

#[async_trait]
pub trait AdviceProvider: Send + Sync {
    /// Send one prompt, return the raw (untrusted) reply text.
    async fn suggest(&self, prompt: &str) -> Result<String, AdviceError>;
}

/// Provider for any OpenAI-compatible `/chat/completions` endpoint
pub struct OpenAiAdviceProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiAdviceProvider {
    pub fn new(config: &AdviceConfig, api_key: String) -> Result<Self, AdviceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    /// Build a provider from config, or `None` when no API key is configured.
    pub fn from_config(config: &AdviceConfig) -> Result<Option<Self>, AdviceError> {
        match &config.api_key {
            Some(key) if !key.trim().is_empty() => Ok(Some(Self::new(config, key.clone())?)),
            _ => Ok(None),
        }
    }
}

#[async_trait]
impl AdviceProvider for OpenAiAdviceProvider {
    async fn suggest(&self, prompt: &str) -> Result<String, AdviceError> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt },
            ],
            "response_format": { "type": "json_object" },
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        });

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let res = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(AdviceError::Status(status.as_u16()));
        }

        let json: serde_json::Value = res.json().await?;
        json["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or(AdviceError::EmptyContent)
    }
}
