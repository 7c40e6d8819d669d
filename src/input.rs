// src/input.rs

use crate::error::VerifyError;

pub const MIN_CLAIM_CHARS: usize = 5;

/// Sanitized claim text. Only constructible through [`ClaimInput::parse`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimInput {
    text: String,
}

impl ClaimInput {
    pub fn parse(raw: &str) -> Result<Self, VerifyError> {
        let text = sanitize(raw);
        if text.chars().count() < MIN_CLAIM_CHARS {
            return Err(VerifyError::Validation("Content too short for analysis.".to_string()));
        }
        Ok(Self { text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_inner(self) -> String {
        self.text
    }
}

/// Drop non-whitespace control characters, then trim and collapse whitespace
/// runs to one space.
pub fn sanitize(raw: &str) -> String {
    let printable: String = raw
        .chars()
        .filter(|c| c.is_whitespace() || !c.is_ascii_control())
        .collect();
    printable.split_whitespace().collect::<Vec<_>>().join(" ")
}
