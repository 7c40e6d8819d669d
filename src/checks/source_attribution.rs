use regex::Regex;
use std::sync::LazyLock;

use super::{weights, RuleHit};

static TRUSTED_OUTLETS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)reuters|associated\s+press|bbc|ap\s+news|npr|bloomberg").ok()
});

static VAGUE_ATTRIBUTION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)sources\s+say|reported\s+by|according\s+to").ok());

/// Exactly one outcome: trusted outlet, no attribution at all, or vague attribution.
pub fn check_source_attribution(text: &str) -> RuleHit {
    if matches(&TRUSTED_OUTLETS, text) {
        RuleHit::new("source", weights::TRUSTED_SOURCE, "Cited a trusted news organization")
    } else if !matches(&VAGUE_ATTRIBUTION, text) {
        RuleHit::new("source", weights::NO_SOURCE, "No clear source attribution found")
    } else {
        RuleHit::new("source", weights::VAGUE_SOURCE, "Vague source attribution")
    }
}

fn matches(regex: &LazyLock<Option<Regex>>, text: &str) -> bool {
    regex.as_ref().is_some_and(|re| re.is_match(text))
}
