//! OpenAI Provider
//!
//! Chat completions against the OpenAI API (or any OpenAI-compatible endpoint).

pub mod client;
pub mod config;
pub mod error;
pub mod streaming;
pub mod transformer;

pub use client::OpenAIProvider;
pub use config::OpenAIConfig;
pub use error::OpenAIError;
