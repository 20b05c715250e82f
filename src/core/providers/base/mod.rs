//! Base components shared by all providers

pub mod client;
pub mod sse;

pub use client::build_http_client;
pub use sse::{OpenAICompatibleTransformer, SSEEvent, SSEParser, SSEStream, SSETransformer};
