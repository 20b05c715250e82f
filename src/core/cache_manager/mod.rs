//! In-memory answer cache
//!
//! Memoizes LLM answers keyed by the exact ordered contents of the
//! conversation that produced them. Entries live for the lifetime of the
//! process; there is no eviction, expiry or size bound.

pub mod manager;
pub mod types;

pub use manager::AnswerCache;
pub use types::{CacheKey, CacheStats};
