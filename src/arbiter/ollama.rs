use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use super::ModelBackend;
use crate::config::VerifierConfig;
use crate::error::ModelError;

/// Ollama-compatible `/api/generate` endpoint, asked for JSON output.
pub struct OllamaBackend {
    client: reqwest::Client,
    generate_url: String,
    model: String,
}

impl OllamaBackend {
    pub fn new(base_url: &str, model: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            generate_url: format!("{}/api/generate", base_url.trim_end_matches('/')),
            model: model.to_string(),
        }
    }

    pub fn from_config(config: &VerifierConfig) -> Self {
        Self::new(&config.model_base_url, &config.model, config.model_timeout)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

#[async_trait]
impl ModelBackend for OllamaBackend {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        debug!("POST {}", self.generate_url);

        let request_body = json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
            "format": "json",
            "options": {
                "temperature": 0.1,
                "num_ctx": 4096,
            },
        });

        let response = self
            .client
            .post(&self.generate_url)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ModelError::Status(response.status().as_u16()));
        }

        let body: GenerateResponse = response.json().await?;
        Ok(body.response)
    }
}
