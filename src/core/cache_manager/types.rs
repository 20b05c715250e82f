//! Cache manager type definitions
//!
//! Cache keys and statistics for the answer cache.

use crate::core::types::ChatMessage;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Cache key: the ordered contents of every message in a conversation
///
/// Two conversations whose messages carry identical contents in identical
/// order map to the same key. Roles are not part of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    parts: Arc<[String]>,
}

impl CacheKey {
    /// Create a key from message contents in order
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a key from a message sequence
    pub fn from_messages(messages: &[ChatMessage]) -> Self {
        Self::new(messages.iter().map(|message| message.content.as_str()))
    }

    /// The ordered contents this key was built from
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

}

/// Atomic cache statistics for lock-free hot path updates
#[derive(Debug, Default)]
pub struct AtomicCacheStats {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub stores: AtomicU64,
}

impl AtomicCacheStats {
    /// Create a snapshot of current stats
    pub fn snapshot(&self, entries: usize) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let lookups = hits + misses;
        CacheStats {
            entries,
            hits,
            misses,
            stores: self.stores.load(Ordering::Relaxed),
            hit_rate: if lookups == 0 {
                0.0
            } else {
                hits as f64 / lookups as f64
            },
        }
    }

    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.stores.store(0, Ordering::Relaxed);
    }
}

/// Cache statistics snapshot (returned to callers)
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub stores: u64,
    /// Share of lookups served from the cache, 0.0 before any lookup
    pub hit_rate: f64,
}
