use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::{EvidenceProvider, ProviderError};
use crate::types::EvidenceItem;

/// Scripted provider for tests. Counts every `search` call.
pub struct MockProvider {
    pub name: String,
    pub items: Vec<EvidenceItem>,
    pub fail: bool,
    pub configured: bool,
    pub delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockProvider {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            items: Vec::new(),
            fail: false,
            configured: true,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_items(mut self, items: Vec<EvidenceItem>) -> Self {
        self.items = items;
        self
    }

    pub fn with_error(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn unconfigured(mut self) -> Self {
        self.configured = false;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EvidenceProvider for MockProvider {
    fn provider_name(&self) -> &str {
        &self.name
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn search(&self, _query: &str) -> Result<Vec<EvidenceItem>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail {
            return Err(ProviderError::Network("connection refused".to_string()));
        }

        Ok(self.items.clone())
    }
}
