use crate::types::*;

pub const IMPOSSIBLE_VERDICT: &str = "Fabricated/Impossible";
pub const STRONG_AFFIRMATIVE: &str = "Highly Credible";
pub const QUALIFIED_AFFIRMATIVE: &str = "Partially Verified";
pub const LIKELY_FALSE: &str = "Likely False Information";

/// Score forced onto negative verdicts that came back with a high number.
pub const CONTRADICTION_SCORE: f64 = 10.0;
const CONTRADICTION_THRESHOLD: f64 = 40.0;

/// Reconcile the model verdict with the linguistic rules. The model score is
/// authoritative; rules only travel along as diagnostics.
pub fn fuse(model: &ModelVerdict, rules: &RulesResult, lane: &LaneClassification) -> FinalDecision {
    let breakdown = build_breakdown(model, rules);
    let metadata = DecisionMetadata::for_lane(lane);

    if !model.is_scientifically_possible {
        return FinalDecision {
            verdict: IMPOSSIBLE_VERDICT.to_string(),
            risk_level: RiskLevel::Critical,
            score: 0,
            reason: Some(model.assessment.clone()),
            breakdown: Some(breakdown),
            metadata: Some(metadata),
        };
    }

    let mut score = if model.credibility_score.is_finite() {
        model.credibility_score.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let mut verdict = model.verdict.clone();

    if (verdict == "FALSE" || verdict == "MISLEADING") && score > CONTRADICTION_THRESHOLD {
        score = CONTRADICTION_SCORE;
    }

    let risk_level = if score >= 80.0 {
        if verdict == "TRUE" {
            verdict = STRONG_AFFIRMATIVE.to_string();
        }
        RiskLevel::Low
    } else if score >= 50.0 {
        if verdict == "TRUE" {
            verdict = QUALIFIED_AFFIRMATIVE.to_string();
        }
        RiskLevel::Medium
    } else {
        if verdict == "FALSE" {
            verdict = LIKELY_FALSE.to_string();
        }
        RiskLevel::High
    };

    FinalDecision {
        verdict,
        risk_level,
        score: score.round() as u8,
        reason: Some(model.assessment.clone()),
        breakdown: Some(breakdown),
        metadata: Some(metadata),
    }
}

fn build_breakdown(model: &ModelVerdict, rules: &RulesResult) -> Breakdown {
    let (status, similarity) = match model.origin {
        VerdictOrigin::Model => ("completed", Some(model.credibility_score / 100.0)),
        VerdictOrigin::Fallback => ("unavailable", None),
    };

    Breakdown {
        ai_analysis: ModelAnalysis {
            status: status.to_string(),
            similarity,
            reason: model.assessment.clone(),
        },
        language_analysis: LanguageAnalysis {
            score: rules.score,
            issues: rules.reasons.clone(),
            weights: rules.breakdown.clone(),
        },
    }
}

impl DecisionMetadata {
    pub fn for_lane(lane: &LaneClassification) -> Self {
        Self {
            lane: lane.lane,
            category: lane.category.clone(),
            sources_found: None,
            processing_time: String::new(),
        }
    }
}
