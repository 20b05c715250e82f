//! LLM provider abstraction
//!
//! The gateway talks to its language model through the [`LLMProvider`] trait:
//! send a conversation, receive a stream of completion chunks. The concrete
//! provider is injected at startup, so tests can substitute a stub.

pub mod base;
pub mod openai;
pub mod unified_provider;

use crate::core::types::{ChatChunk, ChatRequest, ChatResponse};
use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

pub use openai::OpenAIProvider;
pub use unified_provider::ProviderError;

/// Stream of completion chunks in the order the provider produced them
pub type ChatStream = Pin<Box<dyn Stream<Item = Result<ChatChunk, ProviderError>> + Send>>;

/// A chat completion backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Provider name used in logs and errors
    fn name(&self) -> &'static str;

    /// Request a streamed completion
    async fn chat_completion_stream(&self, request: ChatRequest) -> Result<ChatStream, ProviderError>;

    /// Request a complete, non-streamed completion
    async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError>;
}
