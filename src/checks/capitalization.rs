use super::{weights, RuleHit};

const MIN_LENGTH: usize = 20;
const CAPS_RATIO: f64 = 0.4;

/// Yelling check: share of ASCII capitals over the whole text length.
pub fn check_excessive_caps(text: &str) -> Option<RuleHit> {
    let total = text.chars().count();
    if total <= MIN_LENGTH {
        return None;
    }

    let caps = text.chars().filter(|c| c.is_ascii_uppercase()).count();
    if (caps as f64 / total as f64) <= CAPS_RATIO {
        return None;
    }

    Some(RuleHit::new(
        "caps",
        weights::EXCESSIVE_CAPS,
        "Excessive use of CAPITAL LETTERS",
    ))
}
