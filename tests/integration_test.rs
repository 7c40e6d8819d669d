use claim_verifier::*;
use claim_verifier::arbiter::MockBackend;
use claim_verifier::providers::MockProvider;
use std::sync::Arc;
use std::time::Duration;

fn build_verifier(
    provider: Arc<MockProvider>,
    backend: Arc<MockBackend>,
    model_timeout: Duration,
) -> Arc<Verifier> {
    let cache = Arc::new(EvidenceCache::new(Duration::from_secs(15 * 60)));
    let aggregator = EvidenceAggregator::new(vec![provider as Arc<dyn EvidenceProvider>], cache);
    let arbiter = ModelArbiter::new(backend).with_timeout(model_timeout);
    Arc::new(Verifier::new(LaneRules::builtin(), aggregator, arbiter))
}

#[tokio::test]
async fn test_flat_earth_is_rejected_on_fast_lane() {
    let provider = Arc::new(MockProvider::new("feed"));
    let backend = Arc::new(MockBackend::replying("{}"));
    let verifier = build_verifier(provider.clone(), backend.clone(), Duration::from_secs(45));

    let lane = classify("The earth is flat and NASA lied");
    assert_eq!(lane.lane, Lane::KnownFalse);
    assert_eq!(lane.category, "flatEarth");

    let decision = verifier.verify("The earth is flat and NASA lied").await.unwrap();

    assert_eq!(decision.verdict, "Known False Information");
    assert_eq!(decision.score, 0);
    assert_eq!(decision.risk_level, RiskLevel::High);
    assert_eq!(provider.calls(), 0);
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn test_sensational_claim_runs_full_pipeline() {
    let text = "BREAKING!!! SHARE NOW!!! Aliens landed in Ohio!!!";

    let rules = score_text(text);
    assert!(rules.score < 75);
    assert_eq!(rules.score, 20);
    assert_eq!(classify(text).lane, Lane::Normal);

    let provider = Arc::new(MockProvider::new("feed"));
    let backend = Arc::new(MockBackend::replying(
        r#"{"verdict": "FALSE", "credibility_score": 3, "assessment": "No outlet reports a landing", "is_scientifically_possible": true}"#,
    ));
    let verifier = build_verifier(provider.clone(), backend, Duration::from_secs(45));

    let decision = verifier.verify(text).await.unwrap();

    assert_eq!(decision.verdict, "Likely False Information");
    assert_eq!(decision.risk_level, RiskLevel::High);
    assert_eq!(decision.score, 3);
    let breakdown = decision.breakdown.unwrap();
    assert_eq!(breakdown.language_analysis.score, 20);
    assert_eq!(breakdown.language_analysis.issues.len(), 3);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_no_evidence_and_model_timeout_degrades_to_unverified() {
    let provider = Arc::new(MockProvider::new("feed"));
    let backend = Arc::new(MockBackend::replying("{}").with_delay(Duration::from_secs(5)));
    let verifier = build_verifier(provider, backend, Duration::from_millis(50));

    let decision = verifier
        .verify("The town council approved a new library budget")
        .await
        .unwrap();

    assert_eq!(decision.verdict, "UNVERIFIED");
    assert_eq!(decision.score, 0);
    assert_eq!(decision.risk_level, RiskLevel::High);
    assert!(decision.reason.unwrap().contains("analysis failed"));
    assert_eq!(decision.metadata.unwrap().sources_found, Some(0));
}

#[tokio::test]
async fn test_impossible_claim_is_critical() {
    let provider = Arc::new(MockProvider::new("feed"));
    let backend = Arc::new(MockBackend::replying(
        r#"```json
{"verdict": "TRUE", "credibilityScore": 97, "assessment": "Perpetual motion violates thermodynamics", "isScientificallyPossible": false}
```"#,
    ));
    let verifier = build_verifier(provider, backend, Duration::from_secs(45));

    let decision = verifier
        .verify("Local man builds perpetual motion engine in garage")
        .await
        .unwrap();

    assert_eq!(decision.verdict, "Fabricated/Impossible");
    assert_eq!(decision.risk_level, RiskLevel::Critical);
    assert_eq!(decision.score, 0);
}

#[tokio::test]
async fn test_same_claim_reuses_cached_evidence() {
    let provider = Arc::new(MockProvider::new("feed").with_items(vec![
        EvidenceItem::new("AP", "2024-10-14", "Bridge reopens after repairs"),
        EvidenceItem::new("AP", "2024-10-14", "Bridge reopens after repairs"),
    ]));
    let backend = Arc::new(MockBackend::replying(
        r#"{"verdict": "TRUE", "credibility_score": 82, "assessment": "Reported by [AP]"}"#,
    ));
    let verifier = build_verifier(provider.clone(), backend.clone(), Duration::from_secs(45));

    let first = verifier.verify("The river bridge reopened this week").await.unwrap();
    let second = verifier.verify("The river bridge reopened this week").await.unwrap();

    assert_eq!(provider.calls(), 1);
    assert_eq!(backend.calls(), 2);
    assert_eq!(first.metadata.unwrap().sources_found, Some(1));
    assert_eq!(second.verdict, "Highly Credible");
}

#[tokio::test]
async fn test_short_input_is_validation_error() {
    let provider = Arc::new(MockProvider::new("feed"));
    let backend = Arc::new(MockBackend::replying("{}"));
    let verifier = build_verifier(provider, backend, Duration::from_secs(45));

    let result = verifier.verify("\n\t ab \u{7} ").await;

    assert!(matches!(result, Err(VerifyError::Validation(_))));
}
