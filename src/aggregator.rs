// src/aggregator.rs

use futures::future::join_all;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::cache::{fingerprint, EvidenceCache};
use crate::config::{MAX_EVIDENCE_ITEMS, PROVIDER_TIMEOUT};
use crate::providers::{EvidenceProvider, ProviderError};
use crate::types::{AggregatedEvidence, EvidenceItem};

/// Fans a query out to every configured provider and merges the results.
///
/// Each provider gets its own timeout. A provider that fails or times out
/// contributes nothing and never affects the others.
pub struct EvidenceAggregator {
    providers: Vec<Arc<dyn EvidenceProvider>>,
    cache: Arc<EvidenceCache>,
    provider_timeout: Duration,
}

impl EvidenceAggregator {
    pub fn new(providers: Vec<Arc<dyn EvidenceProvider>>, cache: Arc<EvidenceCache>) -> Self {
        Self {
            providers,
            cache,
            provider_timeout: PROVIDER_TIMEOUT,
        }
    }

    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }

    pub fn cache(&self) -> &EvidenceCache {
        &self.cache
    }

    pub async fn aggregate(&self, query: &str) -> AggregatedEvidence {
        let key = fingerprint(query);

        if let Some(cached) = self.cache.get(&key) {
            debug!("Evidence cache hit for {:?}", key);
            return cached;
        }

        info!("Aggregating evidence from {} providers", self.providers.len());

        let searches = self
            .providers
            .iter()
            .filter(|provider| provider.is_configured())
            .map(|provider| self.search_one(provider.as_ref(), query));
        let results = join_all(searches).await;

        let evidence = merge(results, MAX_EVIDENCE_ITEMS);
        if evidence.is_empty() {
            warn!("No evidence found across all providers");
        } else {
            info!("Found {} evidence items", evidence.len());
        }

        self.cache.set(key, evidence.clone());
        evidence
    }

    async fn search_one(&self, provider: &dyn EvidenceProvider, query: &str) -> Vec<EvidenceItem> {
        let outcome = tokio::time::timeout(self.provider_timeout, provider.search(query))
            .await
            .unwrap_or(Err(ProviderError::Timeout));

        match outcome {
            Ok(items) => items,
            Err(e) => {
                warn!("Provider {} failed: {}", provider.provider_name(), e);
                Vec::new()
            }
        }
    }
}

/// Concatenate in provider order, drop exact duplicates, cap the length.
fn merge(results: Vec<Vec<EvidenceItem>>, cap: usize) -> AggregatedEvidence {
    let mut seen = HashSet::new();
    let items = results
        .into_iter()
        .flatten()
        .filter(|item| seen.insert(item.to_string()))
        .take(cap)
        .collect();

    AggregatedEvidence { items }
}
