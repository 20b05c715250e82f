//! Answer cache implementation

use super::types::{AtomicCacheStats, CacheKey, CacheStats};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::Ordering;
use tracing::debug;

/// Process-wide answer cache
///
/// Constructed once at startup and shared by `Arc` handle. The map sits behind
/// a read-write lock so concurrent requests for distinct keys are safe; two
/// concurrent misses for the same key both store, and the last writer wins.
#[derive(Debug, Default)]
pub struct AnswerCache {
    entries: RwLock<HashMap<CacheKey, String>>,
    stats: AtomicCacheStats,
}

impl AnswerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cached answer
    pub fn lookup(&self, key: &CacheKey) -> Option<String> {
        match self.entries.read().get(key) {
            Some(answer) => {
                self.stats.hits.fetch_add(1, Ordering::Relaxed);
                debug!(parts = key.parts().len(), "Answer cache hit");
                Some(answer.clone())
            }
            None => {
                self.stats.misses.fetch_add(1, Ordering::Relaxed);
                debug!(parts = key.parts().len(), "Answer cache miss");
                None
            }
        }
    }

    /// Store an answer, overwriting any previous value for the key
    pub fn store(&self, key: CacheKey, answer: impl Into<String>) {
        let answer = answer.into();
        let bytes = answer.len();
        self.entries.write().insert(key, answer);
        self.stats.stores.fetch_add(1, Ordering::Relaxed);
        debug!(bytes, "Stored answer in cache");
    }

    /// Check presence without touching statistics
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop every entry and reset statistics
    pub fn clear(&self) {
        self.entries.write().clear();
        self.stats.reset();
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len())
    }
}
