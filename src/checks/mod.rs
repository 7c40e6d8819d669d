// src/checks/mod.rs

pub mod punctuation;
pub mod capitalization;
pub mod source_attribution;
pub mod urgency;

// Re-export check functions
pub use punctuation::check_sensational_punctuation;
pub use capitalization::check_excessive_caps;
pub use source_attribution::check_source_attribution;
pub use urgency::check_urgency_language;

/// Signed score adjustments applied on top of the base score.
pub mod weights {
    pub const NO_SOURCE: i32 = -25;
    pub const VAGUE_SOURCE: i32 = -15;
    pub const SENSATIONAL_PUNCTUATION: i32 = -15;
    pub const EXCESSIVE_CAPS: i32 = -10;
    pub const URGENCY_LANGUAGE: i32 = -15;
    pub const TRUSTED_SOURCE: i32 = 20;
}

/// One triggered linguistic rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleHit {
    pub key: &'static str,
    pub weight: i32,
    pub reason: String,
}

impl RuleHit {
    pub fn new(key: &'static str, weight: i32, reason: impl Into<String>) -> Self {
        Self {
            key,
            weight,
            reason: reason.into(),
        }
    }
}
