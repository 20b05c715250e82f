//! # RAG Gateway
//!
//! A small web gateway that forwards a question to an OpenAI-compatible chat
//! completion API, memoizes the answer per conversation, and renders it into
//! an HTML page.
//!
//! ## Features
//!
//! - **Answer cache**: identical conversations are answered once per process
//! - **Streaming**: fragments are forwarded in order as the provider produces them
//! - **Pluggable provider**: the LLM sits behind the [`LLMProvider`] trait
//! - **Configurable**: YAML file, environment variables and CLI flags
//!
//! ## Running the gateway
//!
//! ```rust,no_run
//! use rag_gateway::{Config, run_server};
//!
//! #[tokio::main]
//! async fn main() -> rag_gateway::Result<()> {
//!     let config = Config::from_env()?;
//!     run_server(config).await
//! }
//! ```
//!
//! `GET /rag?query=What%20is%20Rust%3F` then returns the rendered answer page.

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

pub use core::cache_manager::{AnswerCache, CacheKey, CacheStats};
pub use core::providers::{ChatStream, LLMProvider, OpenAIProvider, ProviderError};
pub use core::rag::{Conversation, RagHandler, RagSettings, StreamCallback};
pub use core::types::{ChatChunk, ChatMessage, ChatRequest, ChatResponse, MessageRole};
pub use server::{HttpServer, ServerBuilder, run_server};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Gateway build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time as seconds since the Unix epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
        }
    }
}

/// Build information embedded at compile time
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
