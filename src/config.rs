// src/config.rs

use std::env;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MODEL_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "mistral";

pub const PROVIDER_TIMEOUT: Duration = Duration::from_secs(8);
pub const MODEL_TIMEOUT: Duration = Duration::from_secs(45);
pub const EVIDENCE_TTL: Duration = Duration::from_secs(15 * 60);
pub const MAX_EVIDENCE_ITEMS: usize = 15;
pub const ITEMS_PER_PROVIDER: usize = 5;

/// Process configuration. Credentials that are absent leave their provider disabled.
#[derive(Clone, Debug)]
pub struct VerifierConfig {
    pub port: u16,
    pub model_base_url: String,
    pub model: String,
    pub newsapi_key: Option<String>,
    pub bing_news_key: Option<String>,
    pub provider_timeout: Duration,
    pub model_timeout: Duration,
    pub evidence_ttl: Duration,
}

impl VerifierConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(port) = read_var("PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: port.clone(),
            })?;
        }
        if let Some(url) = read_var("OLLAMA_BASE_URL") {
            config.model_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(model) = read_var("OLLAMA_MODEL") {
            config.model = model;
        }
        config.newsapi_key = read_var("NEWSAPI_KEY");
        config.bing_news_key = read_var("BING_NEWS_KEY");

        Ok(config)
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            model_base_url: DEFAULT_MODEL_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            newsapi_key: None,
            bing_news_key: None,
            provider_timeout: PROVIDER_TIMEOUT,
            model_timeout: MODEL_TIMEOUT,
            evidence_ttl: EVIDENCE_TTL,
        }
    }
}

fn read_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
