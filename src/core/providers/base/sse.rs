//! SSE (Server-Sent Events) Parser
//!
//! Parses an OpenAI-compatible `text/event-stream` body into [`ChatChunk`]s.
//! Providers only implement [`SSETransformer`] to turn one event payload into a chunk.

use bytes::{Bytes, BytesMut};
use futures::Stream;
use serde_json::Value;
use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::{ChatChunk, ChatDelta, ChatStreamChoice, FinishReason};

/// Parsed SSE Event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SSEEvent {
    pub event_type: Option<String>,
    pub data: String,
    pub id: Option<String>,
}

impl SSEEvent {
    /// Parse SSE event from a line
    pub fn from_line(line: &str) -> Option<Self> {
        if line.is_empty() || line.starts_with(':') {
            return None;
        }

        let colon_pos = line.find(':')?;
        let field = &line[..colon_pos];
        let value = line[colon_pos + 1..].trim_start();

        match field {
            "data" => Some(SSEEvent {
                data: value.to_string(),
                ..Default::default()
            }),
            "event" => Some(SSEEvent {
                event_type: Some(value.to_string()),
                ..Default::default()
            }),
            "id" => Some(SSEEvent {
                id: Some(value.to_string()),
                ..Default::default()
            }),
            _ => None,
        }
    }
}

/// Trait for provider-specific SSE transformation
pub trait SSETransformer: Send + Sync {
    /// Provider name for error reporting
    fn provider_name(&self) -> &'static str;

    /// Check if this is the end-of-stream marker
    fn is_end_marker(&self, data: &str) -> bool {
        data.trim() == "[DONE]"
    }

    /// Transform raw SSE data into ChatChunk
    fn transform_chunk(&self, data: &str) -> Result<Option<ChatChunk>, ProviderError>;
}

/// Incremental SSE parser
pub struct SSEParser<T: SSETransformer> {
    transformer: T,
    buffer: BytesMut,
    current_event: Option<SSEEvent>,
    done: bool,
}

impl<T: SSETransformer> SSEParser<T> {
    pub fn new(transformer: T) -> Self {
        Self {
            transformer,
            buffer: BytesMut::new(),
            current_event: None,
            done: false,
        }
    }

    /// Whether the end-of-stream marker has been seen
    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn provider_name(&self) -> &'static str {
        self.transformer.provider_name()
    }

    /// Process raw bytes, returning every chunk completed by them
    ///
    /// Incomplete trailing lines stay buffered as bytes until the next call,
    /// so a multi-byte character split across reads is decoded whole.
    pub fn process_bytes(&mut self, bytes: &[u8]) -> Result<Vec<ChatChunk>, ProviderError> {
        self.buffer.extend_from_slice(bytes);

        let mut chunks = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line = self.buffer.split_to(pos + 1);
            let line = self.decode_line(&line[..pos])?;
            if let Some(chunk) = self.process_line(&line)? {
                chunks.push(chunk);
            }
        }

        Ok(chunks)
    }

    /// Flush whatever is left once the body has ended
    pub fn finish(&mut self) -> Result<Vec<ChatChunk>, ProviderError> {
        let mut chunks = Vec::new();
        let rest = self.buffer.split();
        if !rest.is_empty() {
            let line = self.decode_line(&rest)?;
            if let Some(chunk) = self.process_line(&line)? {
                chunks.push(chunk);
            }
        }
        if let Some(chunk) = self.process_line("")? {
            chunks.push(chunk);
        }
        Ok(chunks)
    }

    fn decode_line(&self, line: &[u8]) -> Result<String, ProviderError> {
        let line = std::str::from_utf8(line).map_err(|e| {
            ProviderError::response_parsing(self.provider_name(), format!("Invalid UTF-8 in SSE line: {}", e))
        })?;
        Ok(line.trim_end_matches('\r').to_string())
    }

    fn process_line(&mut self, line: &str) -> Result<Option<ChatChunk>, ProviderError> {
        // Empty line signals end of event
        if line.is_empty() {
            return match self.current_event.take() {
                Some(event) => self.process_event(event),
                None => Ok(None),
            };
        }

        if let Some(event) = SSEEvent::from_line(line) {
            match self.current_event.as_mut() {
                Some(current) => {
                    if !event.data.is_empty() {
                        if !current.data.is_empty() {
                            current.data.push('\n');
                        }
                        current.data.push_str(&event.data);
                    }
                    if event.event_type.is_some() {
                        current.event_type = event.event_type;
                    }
                    if event.id.is_some() {
                        current.id = event.id;
                    }
                }
                None => self.current_event = Some(event),
            }
        }

        Ok(None)
    }

    fn process_event(&mut self, event: SSEEvent) -> Result<Option<ChatChunk>, ProviderError> {
        if event.data.is_empty() || self.done {
            return Ok(None);
        }

        if self.transformer.is_end_marker(&event.data) {
            self.done = true;
            return Ok(None);
        }

        self.transformer.transform_chunk(&event.data)
    }
}

/// Stream of chunks parsed from a byte stream
///
/// Uses `VecDeque` for buffered chunks so several events in one network read
/// are yielded in order.
pub struct SSEStream<S, T>
where
    S: Stream<Item = Result<Bytes, reqwest::Error>> + Send + Unpin,
    T: SSETransformer,
{
    inner: S,
    parser: SSEParser<T>,
    chunk_buffer: VecDeque<ChatChunk>,
    finished: bool,
}

impl<S, T> SSEStream<S, T>
where
    S: Stream<Item = Result<Bytes, reqwest::Error>> + Send + Unpin,
    T: SSETransformer,
{
    pub fn new(stream: S, transformer: T) -> Self {
        Self {
            inner: stream,
            parser: SSEParser::new(transformer),
            chunk_buffer: VecDeque::new(),
            finished: false,
        }
    }
}

impl<S, T> Stream for SSEStream<S, T>
where
    S: Stream<Item = Result<Bytes, reqwest::Error>> + Send + Unpin,
    T: SSETransformer + Unpin,
{
    type Item = Result<ChatChunk, ProviderError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        loop {
            if let Some(chunk) = this.chunk_buffer.pop_front() {
                return Poll::Ready(Some(Ok(chunk)));
            }

            if this.finished || this.parser.is_done() {
                return Poll::Ready(None);
            }

            match Pin::new(&mut this.inner).poll_next(cx) {
                Poll::Ready(Some(Ok(bytes))) => match this.parser.process_bytes(&bytes) {
                    Ok(chunks) => this.chunk_buffer.extend(chunks),
                    Err(e) => {
                        this.finished = true;
                        return Poll::Ready(Some(Err(e)));
                    }
                },
                Poll::Ready(Some(Err(e))) => {
                    this.finished = true;
                    let provider = this.parser.provider_name();
                    let error = if e.is_timeout() {
                        ProviderError::timeout(provider, format!("Stream timed out: {}", e))
                    } else {
                        ProviderError::network(provider, format!("Stream error: {}", e))
                    };
                    return Poll::Ready(Some(Err(error)));
                }
                Poll::Ready(None) => {
                    this.finished = true;
                    match this.parser.finish() {
                        Ok(chunks) => this.chunk_buffer.extend(chunks),
                        Err(e) => return Poll::Ready(Some(Err(e))),
                    }
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

/// OpenAI-compatible SSE Transformer
#[derive(Debug, Clone)]
pub struct OpenAICompatibleTransformer {
    provider: &'static str,
}

impl OpenAICompatibleTransformer {
    pub fn new(provider: &'static str) -> Self {
        Self { provider }
    }
}

impl SSETransformer for OpenAICompatibleTransformer {
    fn provider_name(&self) -> &'static str {
        self.provider
    }

    fn transform_chunk(&self, data: &str) -> Result<Option<ChatChunk>, ProviderError> {
        let json_value: Value = serde_json::from_str(data).map_err(|e| {
            ProviderError::response_parsing(self.provider, format!("Failed to parse SSE JSON: {}", e))
        })?;

        // Some providers report failures in-band
        if let Some(error) = json_value.get("error") {
            let message = error
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("unknown streaming error");
            return Err(ProviderError::other(self.provider, message));
        }

        let id = json_value
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or("stream-chunk")
            .to_string();

        let model = json_value
            .get("model")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown")
            .to_string();

        let created = json_value
            .get("created")
            .and_then(|v| v.as_i64())
            .unwrap_or_else(|| chrono::Utc::now().timestamp());

        let choices = json_value
            .get("choices")
            .and_then(|v| v.as_array())
            .ok_or_else(|| ProviderError::response_parsing(self.provider, "No choices in SSE chunk"))?;

        let mut stream_choices = Vec::with_capacity(choices.len());
        for (index, choice) in choices.iter().enumerate() {
            let delta: ChatDelta = match choice.get("delta") {
                Some(delta) => serde_json::from_value(delta.clone()).map_err(|e| {
                    ProviderError::response_parsing(
                        self.provider,
                        format!("Failed to parse delta: {}", e),
                    )
                })?,
                None => ChatDelta::default(),
            };

            let finish_reason = choice
                .get("finish_reason")
                .and_then(|v| v.as_str())
                .and_then(FinishReason::parse);

            stream_choices.push(ChatStreamChoice {
                index: index as u32,
                delta,
                finish_reason,
            });
        }

        let usage = json_value
            .get("usage")
            .and_then(|v| serde_json::from_value(v.clone()).ok());

        Ok(Some(ChatChunk {
            id,
            object: "chat.completion.chunk".to_string(),
            created,
            model,
            choices: stream_choices,
            usage,
        }))
    }
}
