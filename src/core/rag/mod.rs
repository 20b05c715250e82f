//! Question answering over the LLM provider
//!
//! [`RagHandler`] turns a question into a two-message conversation, serves
//! repeated questions from the [`AnswerCache`](crate::core::cache_manager::AnswerCache)
//! and otherwise streams the answer from the configured provider.

pub mod callbacks;
pub mod conversation;
pub mod handler;

pub use callbacks::{NoopCallback, StdoutCallback, StreamCallback};
pub use conversation::Conversation;
pub use handler::{AnswerStream, RagHandler, RagSettings};
