//! Core functionality for the Gateway
//!
//! Shared types, the answer cache, LLM providers and the RAG request handler.

pub mod cache_manager;
pub mod providers;
pub mod rag;
pub mod types;
