// src/types.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Lane {
    KnownFalse,
    Extraordinary,
    HighImpact,
    Normal,
}

impl Lane {
    /// Lanes whose classification alone settles the verdict.
    pub fn is_fast(&self) -> bool {
        matches!(self, Lane::KnownFalse | Lane::Extraordinary)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Lane::KnownFalse => "KNOWN_FALSE",
            Lane::Extraordinary => "EXTRAORDINARY",
            Lane::HighImpact => "HIGH_IMPACT",
            Lane::Normal => "NORMAL",
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LaneClassification {
    pub lane: Lane,
    pub category: String,
    pub confidence: f64,
    pub reason: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RulesResult {
    pub score: u8,
    pub reasons: Vec<String>,
    pub breakdown: BTreeMap<String, i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceItem {
    pub source_label: String,
    pub published_at: String,
    pub title: String,
    pub snippet: Option<String>,
}

impl EvidenceItem {
    pub fn new(source_label: impl Into<String>, published_at: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            source_label: source_label.into(),
            published_at: published_at.into(),
            title: title.into(),
            snippet: None,
        }
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        let snippet = snippet.into();
        self.snippet = if snippet.trim().is_empty() { None } else { Some(snippet) };
        self
    }
}

/// Flat single-line form used for deduplication and prompt embedding.
impl fmt::Display for EvidenceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ({}): {}", self.source_label, self.published_at, self.title)?;
        if let Some(snippet) = &self.snippet {
            write!(f, " - {}", snippet)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregatedEvidence {
    pub items: Vec<EvidenceItem>,
}

impl AggregatedEvidence {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn lines(&self) -> Vec<String> {
        self.items.iter().map(|item| item.to_string()).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictOrigin {
    Model,
    Fallback,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelVerdict {
    pub verdict: String,
    pub credibility_score: f64,
    pub assessment: String,
    pub is_scientifically_possible: bool,
    pub origin: VerdictOrigin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelAnalysis {
    pub status: String,
    pub similarity: Option<f64>,
    pub reason: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageAnalysis {
    pub score: u8,
    pub issues: Vec<String>,
    pub weights: BTreeMap<String, i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub ai_analysis: ModelAnalysis,
    pub language_analysis: LanguageAnalysis,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionMetadata {
    pub lane: Lane,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources_found: Option<u32>,
    pub processing_time: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalDecision {
    pub verdict: String,
    pub risk_level: RiskLevel,
    pub score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Breakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DecisionMetadata>,
}
