// src/arbiter/mod.rs

pub mod prompt;
pub mod ollama;
pub mod mocks;

pub use mocks::MockBackend;
pub use ollama::OllamaBackend;
pub use prompt::build_prompt;

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use crate::config::MODEL_TIMEOUT;
use crate::error::ModelError;
use crate::types::{AggregatedEvidence, ModelVerdict, VerdictOrigin};

pub const FALLBACK_VERDICT: &str = "UNVERIFIED";
pub const FALLBACK_ASSESSMENT: &str =
    "AI analysis failed: the model backend could not be reached or returned unusable output.";

/// Text-generation backend that answers a prompt with (hopefully) JSON text.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    fn model_name(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}

/// Asks the model to compare a claim against gathered evidence.
pub struct ModelArbiter {
    backend: Arc<dyn ModelBackend>,
    timeout: Duration,
}

impl ModelArbiter {
    pub fn new(backend: Arc<dyn ModelBackend>) -> Self {
        Self {
            backend,
            timeout: MODEL_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Never fails: any backend problem degrades to [`fallback_verdict`].
    pub async fn compare(&self, claim: &str, evidence: &AggregatedEvidence) -> ModelVerdict {
        info!(
            "Comparing claim with model {} ({} evidence items)",
            self.backend.model_name(),
            evidence.len()
        );

        let prompt = build_prompt(claim, evidence);
        let outcome = tokio::time::timeout(self.timeout, self.backend.generate(&prompt))
            .await
            .unwrap_or(Err(ModelError::Timeout))
            .and_then(|raw| parse_verdict(&raw));

        match outcome {
            Ok(verdict) => verdict,
            Err(e) => {
                match &e {
                    ModelError::Timeout => error!("Model request timed out"),
                    ModelError::Connection(cause) => error!("Model backend unreachable: {}", cause),
                    other => error!("Model bridge error: {}", other),
                }
                fallback_verdict()
            }
        }
    }
}

pub fn fallback_verdict() -> ModelVerdict {
    ModelVerdict {
        verdict: FALLBACK_VERDICT.to_string(),
        credibility_score: 0.0,
        assessment: FALLBACK_ASSESSMENT.to_string(),
        is_scientifically_possible: true,
        origin: VerdictOrigin::Fallback,
    }
}

/// Model output as received. Both score spellings are accepted; the legacy
/// `confidence_score` is only consulted when `credibility_score` is absent.
#[derive(Debug, Deserialize)]
struct RawVerdict {
    #[serde(default)]
    verdict: Option<String>,
    #[serde(default, alias = "credibilityScore")]
    credibility_score: Option<f64>,
    #[serde(default, alias = "confidenceScore")]
    confidence_score: Option<f64>,
    #[serde(default)]
    assessment: Option<String>,
    #[serde(default, alias = "isScientificallyPossible")]
    is_scientifically_possible: Option<bool>,
}

impl RawVerdict {
    fn normalize(self) -> ModelVerdict {
        // a zero credibility score defers to the legacy field when it is set
        let score = self
            .credibility_score
            .filter(|s| *s != 0.0)
            .or(self.confidence_score)
            .or(self.credibility_score)
            .filter(|s| s.is_finite())
            .unwrap_or(0.0)
            .clamp(0.0, 100.0);

        ModelVerdict {
            verdict: self.verdict.unwrap_or_else(|| FALLBACK_VERDICT.to_string()),
            credibility_score: score,
            assessment: self.assessment.unwrap_or_else(|| "AI Analysis completed.".to_string()),
            is_scientifically_possible: self.is_scientifically_possible.unwrap_or(true),
            origin: VerdictOrigin::Model,
        }
    }
}

/// Remove markdown code fences the model sometimes wraps around its JSON.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

pub fn parse_verdict(raw: &str) -> Result<ModelVerdict, ModelError> {
    let cleaned = strip_code_fences(raw);
    let parsed: RawVerdict =
        serde_json::from_str(&cleaned).map_err(|e| ModelError::Malformed(e.to_string()))?;
    Ok(parsed.normalize())
}
