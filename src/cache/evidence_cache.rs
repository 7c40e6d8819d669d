use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::clock::{Clock, SystemClock};
use crate::types::AggregatedEvidence;

const FINGERPRINT_CHARS: usize = 50;

/// Cache key for a claim: first 50 characters, lower-cased and trimmed.
pub fn fingerprint(query: &str) -> String {
    let prefix: String = query.chars().take(FINGERPRINT_CHARS).collect();
    prefix.to_lowercase().trim().to_string()
}

#[derive(Clone)]
struct CacheEntry {
    evidence: AggregatedEvidence,
    cached_at: Instant,
}

/// Process-wide evidence cache with a fixed TTL.
///
/// Backed by a sharded concurrent map: readers never block each other and a
/// write replaces the whole entry for its key. Two requests that miss on the
/// same key at once both recompute and the later insert wins, which is fine
/// because the values are equivalent.
pub struct EvidenceCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl EvidenceCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            clock,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get(&self, key: &str) -> Option<AggregatedEvidence> {
        let entry = self.entries.get(key)?;
        let age = self.clock.now().saturating_duration_since(entry.cached_at);
        if age < self.ttl {
            Some(entry.evidence.clone())
        } else {
            None
        }
    }

    pub fn set(&self, key: String, evidence: AggregatedEvidence) {
        let entry = CacheEntry {
            evidence,
            cached_at: self.clock.now(),
        };
        self.entries.insert(key, entry);
    }

    pub fn remove(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Remove expired entries
    pub fn cleanup(&self) {
        let now = self.clock.now();
        self.entries
            .retain(|_, entry| now.saturating_duration_since(entry.cached_at) < self.ttl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use crate::types::EvidenceItem;

    fn make_evidence(title: &str) -> AggregatedEvidence {
        AggregatedEvidence {
            items: vec![EvidenceItem::new("Reuters", "2024-10-14", title)],
        }
    }

    #[test]
    fn test_fingerprint_prefix() {
        let long = format!("  {}", "A".repeat(80));
        let key = fingerprint(&long);

        assert_eq!(key.chars().count(), 48);
        assert!(key.chars().all(|c| c == 'a'));
        assert_eq!(fingerprint("The Earth Is Flat "), "the earth is flat");
    }

    #[test]
    fn test_cache_set_and_get() {
        let cache = EvidenceCache::new(Duration::from_secs(900));

        cache.set("claim".to_string(), make_evidence("one"));

        let cached = cache.get("claim").unwrap();
        assert_eq!(cached.items[0].title, "one");
    }

    #[test]
    fn test_cache_expiration() {
        let clock = Arc::new(ManualClock::new());
        let cache = EvidenceCache::with_clock(Duration::from_secs(900), clock.clone());

        cache.set("claim".to_string(), make_evidence("one"));
        clock.advance(Duration::from_secs(899));
        assert!(cache.get("claim").is_some());

        clock.advance(Duration::from_secs(1));
        assert!(cache.get("claim").is_none());
    }

    #[test]
    fn test_cache_refresh_replaces_entry() {
        let clock = Arc::new(ManualClock::new());
        let cache = EvidenceCache::with_clock(Duration::from_secs(60), clock.clone());

        cache.set("claim".to_string(), make_evidence("old"));
        clock.advance(Duration::from_secs(61));
        cache.set("claim".to_string(), make_evidence("new"));

        assert_eq!(cache.size(), 1);
        assert_eq!(cache.get("claim").unwrap().items[0].title, "new");
    }

    #[test]
    fn test_cache_remove_and_clear() {
        let cache = EvidenceCache::new(Duration::from_secs(60));

        cache.set("key1".to_string(), make_evidence("one"));
        cache.set("key2".to_string(), make_evidence("two"));
        assert!(cache.remove("key1"));
        assert!(!cache.remove("key1"));
        assert_eq!(cache.size(), 1);

        cache.clear();
        assert_eq!(cache.size(), 0);
    }

    #[test]
    fn test_cache_cleanup() {
        let clock = Arc::new(ManualClock::new());
        let cache = EvidenceCache::with_clock(Duration::from_secs(60), clock.clone());

        cache.set("expired".to_string(), make_evidence("old"));
        clock.advance(Duration::from_secs(120));
        cache.set("valid".to_string(), make_evidence("fresh"));

        cache.cleanup();

        assert_eq!(cache.size(), 1);
        assert!(cache.get("valid").is_some());
    }

    #[test]
    fn test_concurrent_writers() {
        let cache = Arc::new(EvidenceCache::new(Duration::from_secs(60)));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = cache.clone();
                std::thread::spawn(move || {
                    for j in 0..50 {
                        cache.set(format!("key{}", j % 10), make_evidence(&format!("{}-{}", i, j)));
                        let _ = cache.get("key0");
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.size(), 10);
    }
}
