use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info};

use crate::aggregator::EvidenceAggregator;
use crate::arbiter::{ModelArbiter, OllamaBackend};
use crate::cache::EvidenceCache;
use crate::config::VerifierConfig;
use crate::error::VerifyError;
use crate::input::ClaimInput;
use crate::lanes::{LaneClassifier, LaneRules};
use crate::providers::{BingNewsProvider, EvidenceProvider, GoogleNewsProvider, NewsApiProvider};
use crate::scoring::{fuse, score_text};
use crate::types::*;

pub const KNOWN_FALSE_VERDICT: &str = "Known False Information";

/// The verification pipeline: lane routing, then rules, evidence, model and fusion.
pub struct Verifier {
    rules: LaneRules,
    aggregator: EvidenceAggregator,
    arbiter: ModelArbiter,
}

impl Verifier {
    pub fn new(rules: LaneRules, aggregator: EvidenceAggregator, arbiter: ModelArbiter) -> Self {
        Self {
            rules,
            aggregator,
            arbiter,
        }
    }

    pub fn from_config(config: &VerifierConfig) -> Self {
        let providers: Vec<Arc<dyn EvidenceProvider>> = vec![
            Arc::new(GoogleNewsProvider::new(config.provider_timeout)),
            Arc::new(NewsApiProvider::new(config.newsapi_key.clone(), config.provider_timeout)),
            Arc::new(BingNewsProvider::new(config.bing_news_key.clone(), config.provider_timeout)),
        ];
        let cache = Arc::new(EvidenceCache::new(config.evidence_ttl));
        let aggregator =
            EvidenceAggregator::new(providers, cache).with_provider_timeout(config.provider_timeout);
        let arbiter = ModelArbiter::new(Arc::new(OllamaBackend::from_config(config)))
            .with_timeout(config.model_timeout);

        Self::new(LaneRules::builtin(), aggregator, arbiter)
    }

    pub fn aggregator(&self) -> &EvidenceAggregator {
        &self.aggregator
    }

    /// Verify raw claim text.
    ///
    /// Short input is rejected before anything runs. Fast lanes answer from the
    /// classification alone. The full path runs on its own task so that a
    /// panic anywhere inside it surfaces as [`VerifyError::Internal`].
    pub async fn verify(self: &Arc<Self>, content: &str) -> Result<FinalDecision, VerifyError> {
        let started = Instant::now();
        let claim = ClaimInput::parse(content)?;

        let preview: String = claim.as_str().chars().take(40).collect();
        info!("Processing: {:?}", preview);

        let lane = LaneClassifier::new(&self.rules).classify(claim.as_str());
        info!("Lane: {} ({})", lane.lane, lane.category);

        if lane.lane.is_fast() {
            return Ok(fast_lane_decision(&lane, started.elapsed()));
        }

        let verifier = Arc::clone(self);
        tokio::spawn(async move { verifier.run_full_path(claim, lane, started).await })
            .await
            .map_err(|e| {
                error!("Pipeline error: {}", e);
                VerifyError::Internal
            })
    }

    async fn run_full_path(
        &self,
        claim: ClaimInput,
        lane: LaneClassification,
        started: Instant,
    ) -> FinalDecision {
        let rules = score_text(claim.as_str());
        let evidence = self.aggregator.aggregate(claim.as_str()).await;
        let verdict = self.arbiter.compare(claim.as_str(), &evidence).await;

        let mut decision = fuse(&verdict, &rules, &lane);
        if let Some(metadata) = decision.metadata.as_mut() {
            metadata.sources_found = Some(evidence.len() as u32);
            metadata.processing_time = format_elapsed(started.elapsed());
        }

        info!(
            "Decision: {} ({:?}, score {})",
            decision.verdict, decision.risk_level, decision.score
        );
        decision
    }
}

fn fast_lane_decision(lane: &LaneClassification, elapsed: Duration) -> FinalDecision {
    let mut metadata = DecisionMetadata::for_lane(lane);
    metadata.processing_time = format_elapsed(elapsed);

    FinalDecision {
        verdict: KNOWN_FALSE_VERDICT.to_string(),
        risk_level: RiskLevel::High,
        score: 0,
        reason: None,
        breakdown: None,
        metadata: Some(metadata),
    }
}

fn format_elapsed(elapsed: Duration) -> String {
    format!("{}ms", elapsed.as_millis())
}
