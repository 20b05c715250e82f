//! Stub providers
//!
//! Deterministic stand-ins for the LLM that record how often they were asked.

use async_trait::async_trait;
use futures::stream;
use rag_gateway::core::types::{ChatChoice, FinishReason};
use rag_gateway::{ChatChunk, ChatMessage, ChatRequest, ChatResponse, ChatStream, LLMProvider, ProviderError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Answers from a fixed table and counts calls
///
/// Streamed answers are split after every space, so a multi-word answer
/// arrives as several fragments.
#[derive(Debug, Default)]
pub struct CountingProvider {
    answers: HashMap<String, String>,
    fallback: String,
    calls: AtomicUsize,
}

impl CountingProvider {
    /// Answer every question with `fallback`
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
            ..Self::default()
        }
    }

    /// Answer `question` with `answer`
    pub fn with_answer(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.answers.insert(question.into(), answer.into());
        self
    }

    /// Number of completions requested so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer_for(&self, request: &ChatRequest) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let question = request
            .messages
            .last()
            .map(|message| message.content.as_str())
            .unwrap_or_default();
        self.answers
            .get(question)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

#[async_trait]
impl LLMProvider for CountingProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn chat_completion_stream(&self, request: ChatRequest) -> Result<ChatStream, ProviderError> {
        let answer = self.answer_for(&request);
        let chunks: Vec<Result<ChatChunk, ProviderError>> = answer
            .split_inclusive(' ')
            .map(|fragment| Ok(ChatChunk::text(request.model.clone(), fragment)))
            .collect();
        Ok(Box::pin(stream::iter(chunks)))
    }

    async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        let answer = self.answer_for(&request);
        Ok(ChatResponse {
            id: "stub-completion".to_string(),
            model: request.model,
            choices: vec![ChatChoice {
                index: 0,
                message: ChatMessage::assistant(answer),
                finish_reason: Some(FinishReason::Stop),
            }],
            usage: None,
        })
    }
}

/// Fails every call with a clone of `error`
#[derive(Debug)]
pub struct FailingProvider {
    error: ProviderError,
    calls: AtomicUsize,
}

impl FailingProvider {
    pub fn new(error: ProviderError) -> Self {
        Self {
            error,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LLMProvider for FailingProvider {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn chat_completion_stream(&self, _request: ChatRequest) -> Result<ChatStream, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.error.clone())
    }

    async fn chat_completion(&self, _request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.error.clone())
    }
}
