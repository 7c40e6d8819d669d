// src/lib.rs

pub mod types;
pub mod error;
pub mod config;
pub mod input;
pub mod lanes;
pub mod checks;
pub mod scoring;
pub mod providers;
pub mod cache;
pub mod aggregator;
pub mod arbiter;
pub mod api;
pub mod server;

// Re-export commonly used types
pub use types::*;
pub use error::{ModelError, ProviderError, VerifyError};
pub use config::VerifierConfig;
pub use input::{sanitize, ClaimInput};
pub use lanes::{classify, LaneClassifier, LaneRules};
pub use scoring::{fuse, score_text};
pub use providers::EvidenceProvider;
pub use cache::EvidenceCache;
pub use aggregator::EvidenceAggregator;
pub use arbiter::{ModelArbiter, ModelBackend};
pub use api::{Verifier, VerifyRequest, VerifyResponse};
