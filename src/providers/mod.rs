// src/providers/mod.rs

use async_trait::async_trait;
use crate::types::EvidenceItem;

pub use crate::error::ProviderError;

/// A news-evidence source queried with the claim text.
#[async_trait]
pub trait EvidenceProvider: Send + Sync {
    fn provider_name(&self) -> &str;

    /// Credentialed providers report `false` when no key is configured and are skipped.
    fn is_configured(&self) -> bool {
        true
    }

    async fn search(&self, query: &str) -> Result<Vec<EvidenceItem>, ProviderError>;
}

// Module declarations
pub mod mocks;
pub mod google_news;
pub mod newsapi;
pub mod bing;

// Re-export for testing
pub use mocks::MockProvider;
pub use google_news::GoogleNewsProvider;
pub use newsapi::NewsApiProvider;
pub use bing::BingNewsProvider;

pub(crate) fn http_client(timeout: std::time::Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_default()
}
