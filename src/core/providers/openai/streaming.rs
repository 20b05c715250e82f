//! OpenAI Streaming Response Handler
//!
//! OpenAI streams use the OpenAI-compatible SSE format handled by the shared parser.

use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;

use super::error::PROVIDER;
use crate::core::providers::base::sse::{OpenAICompatibleTransformer, SSEStream};

/// Boxed byte stream as returned by `reqwest::Response::bytes_stream`
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, reqwest::Error>> + Send>>;

/// Stream of parsed OpenAI chunks
pub type OpenAIStream = SSEStream<ByteStream, OpenAICompatibleTransformer>;

/// Helper function to create OpenAI stream
pub fn create_openai_stream(
    stream: impl Stream<Item = Result<Bytes, reqwest::Error>> + Send + 'static,
) -> OpenAIStream {
    SSEStream::new(Box::pin(stream), OpenAICompatibleTransformer::new(PROVIDER))
}
