use std::collections::BTreeMap;

use crate::checks::*;
use crate::types::RulesResult;

/// Claims start out as plausible; each triggered rule moves the score.
pub const BASE_SCORE: i32 = 75;

pub fn score_text(text: &str) -> RulesResult {
    let hits = [
        check_sensational_punctuation(text),
        check_excessive_caps(text),
        Some(check_source_attribution(text)),
        check_urgency_language(text),
    ];

    let mut score = BASE_SCORE;
    let mut reasons = Vec::new();
    let mut breakdown = BTreeMap::new();

    for hit in hits.into_iter().flatten() {
        score += hit.weight;
        reasons.push(hit.reason);
        breakdown.insert(hit.key.to_string(), hit.weight);
    }

    RulesResult {
        score: score.clamp(0, 100) as u8,
        reasons,
        breakdown,
    }
}
