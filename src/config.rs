//! Engine Configuration
//!
//! Settings for the advice provider, calculation history and HTTP server.
//! Loaded from environment variables or a JSON file; every field has a
//! default so an empty environment yields a working offline configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Advice provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdviceConfig {
    /// API key. When absent the provider is disabled and only fallback
    /// recommendations are produced.
    pub api_key: Option<String>,
    /// Base URL of an OpenAI-compatible API (without `/chat/completions`)
    pub base_url: String,
    pub model: String,
    /// Upper bound on one provider call, in seconds
    pub timeout_secs: u64,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o".to_string(),
            timeout_secs: 10,
            temperature: 0.7,
            max_tokens: 1500,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub advice: AdviceConfig,
    /// SQLite file for calculation history; history is disabled when absent
    pub database_path: Option<String>,
    pub port: u16,
    /// Reject unrecognised answers instead of using default factors
    pub strict_validation: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            advice: AdviceConfig::default(),
            database_path: None,
            port: 3000,
            strict_validation: false,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file. Missing keys take defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: EngineConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config JSON: {:?}", path))?;

        Ok(config)
    }

    /// Configuration from environment variables:
    /// `OPENAI_API_KEY`, `OPENAI_BASE_URL`, `ADVICE_MODEL`,
    /// `ADVICE_TIMEOUT_SECS`, `DATABASE_PATH`, `PORT`, `STRICT_VALIDATION`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = EngineConfig::default();

        if let Some(key) = get("OPENAI_API_KEY") {
            config.advice.api_key = Some(key);
        }
        if let Some(url) = get("OPENAI_BASE_URL") {
            config.advice.base_url = url;
        }
        if let Some(model) = get("ADVICE_MODEL") {
            config.advice.model = model;
        }
        if let Some(secs) = get("ADVICE_TIMEOUT_SECS") {
            config.advice.timeout_secs = secs
                .parse()
                .with_context(|| format!("ADVICE_TIMEOUT_SECS is not a number: '{}'", secs))?;
        }
        if let Some(path) = get("DATABASE_PATH") {
            config.database_path = Some(path);
        }
        if let Some(port) = get("PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("PORT is not a valid port: '{}'", port))?;
        }
        if let Some(flag) = get("STRICT_VALIDATION") {
            config.strict_validation = matches!(flag.to_lowercase().as_str(), "1" | "true" | "yes");
        }

        Ok(config)
    }
}
