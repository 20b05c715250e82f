//! RAG request handler

use async_stream::stream;
use futures::{Stream, StreamExt, TryStreamExt};
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, error};

use super::callbacks::{NoopCallback, StdoutCallback, StreamCallback};
use super::conversation::Conversation;
use crate::config::{CachePolicy, Config};
use crate::core::cache_manager::AnswerCache;
use crate::core::providers::{LLMProvider, ProviderError};
use crate::core::types::ChatRequest;
use crate::utils::error::{GatewayError, Result};

/// Answer fragments in the order the provider produced them
pub type AnswerStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// Per-request parameters taken from configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RagSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
    pub stream: bool,
    pub system_prompt: String,
    pub cache_enabled: bool,
    pub cache_policy: CachePolicy,
}

impl Default for RagSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl RagSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: config.llm.model.clone(),
            max_tokens: config.llm.max_tokens,
            temperature: config.llm.temperature,
            stream: config.llm.stream,
            system_prompt: config.llm.system_prompt.clone(),
            cache_enabled: config.cache.enabled,
            cache_policy: config.cache.policy,
        }
    }

    fn request_for(&self, conversation: Conversation) -> ChatRequest {
        ChatRequest::new(self.model.clone(), conversation.into_messages())
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature)
            .with_stream(self.stream)
    }
}

/// Answers questions, memoizing answers per conversation
#[derive(Clone)]
pub struct RagHandler {
    provider: Arc<dyn LLMProvider>,
    cache: Arc<AnswerCache>,
    callback: Arc<dyn StreamCallback>,
    settings: Arc<RagSettings>,
}

impl std::fmt::Debug for RagHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RagHandler")
            .field("settings", &self.settings)
            .field("cache_entries", &self.cache.len())
            .finish()
    }
}

impl RagHandler {
    pub fn new(provider: Arc<dyn LLMProvider>, cache: Arc<AnswerCache>, settings: RagSettings) -> Self {
        Self {
            provider,
            cache,
            callback: Arc::new(NoopCallback),
            settings: Arc::new(settings),
        }
    }

    /// Build a handler from configuration, echoing to stdout when enabled
    pub fn from_config(provider: Arc<dyn LLMProvider>, cache: Arc<AnswerCache>, config: &Config) -> Self {
        let handler = Self::new(provider, cache, RagSettings::from_config(config));
        if config.llm.echo_to_stdout {
            handler.with_callback(Arc::new(StdoutCallback))
        } else {
            handler
        }
    }

    pub fn with_callback(mut self, callback: Arc<dyn StreamCallback>) -> Self {
        self.callback = callback;
        self
    }

    pub fn settings(&self) -> &RagSettings {
        &self.settings
    }

    pub fn cache(&self) -> &Arc<AnswerCache> {
        &self.cache
    }

    /// Stream the answer to `question`
    ///
    /// A cached answer is yielded as a single fragment without contacting the
    /// provider. On a miss every non-empty fragment is yielded as soon as it
    /// arrives and recorded according to the cache policy. Provider failures
    /// end the stream with an error and leave nothing new in the cache under
    /// the full-answer policy.
    pub fn answer(&self, question: impl Into<String>) -> AnswerStream {
        let provider = Arc::clone(&self.provider);
        let cache = Arc::clone(&self.cache);
        let callback = Arc::clone(&self.callback);
        let settings = Arc::clone(&self.settings);
        let conversation = Conversation::new(settings.system_prompt.clone(), question);

        Box::pin(stream! {
            let key = conversation.cache_key();

            if settings.cache_enabled {
                if let Some(cached) = cache.lookup(&key) {
                    debug!(question = %conversation.question(), "Serving answer from cache");
                    yield Ok(cached);
                    return;
                }
            }

            let request = settings.request_for(conversation);

            if !settings.stream {
                let completion = provider.chat_completion(request).await.and_then(|response| {
                    response.first_content().map(str::to_string).ok_or_else(|| {
                        ProviderError::response_parsing(provider.name(), "No choices in completion response")
                    })
                });
                match completion {
                    Ok(text) => {
                        callback.on_fragment(&text);
                        callback.on_complete();
                        if settings.cache_enabled {
                            cache.store(key, text.clone());
                        }
                        yield Ok(text);
                    }
                    Err(e) => {
                        error!("LLM completion failed: {}", e);
                        yield Err(GatewayError::from(e));
                    }
                }
                return;
            }

            let mut chunks = match provider.chat_completion_stream(request).await {
                Ok(chunks) => chunks,
                Err(e) => {
                    error!("LLM completion failed: {}", e);
                    yield Err(GatewayError::from(e));
                    return;
                }
            };

            let mut full_answer = String::new();
            while let Some(item) = chunks.next().await {
                match item {
                    Ok(chunk) => {
                        let Some(fragment) = chunk.content().map(str::to_string) else {
                            continue;
                        };
                        callback.on_fragment(&fragment);
                        if settings.cache_enabled {
                            match settings.cache_policy {
                                CachePolicy::LastFragment => cache.store(key.clone(), fragment.clone()),
                                CachePolicy::FullAnswer => full_answer.push_str(&fragment),
                            }
                        }
                        yield Ok(fragment);
                    }
                    Err(e) => {
                        error!("LLM stream failed: {}", e);
                        yield Err(GatewayError::from(e));
                        return;
                    }
                }
            }

            callback.on_complete();
            if settings.cache_enabled && settings.cache_policy == CachePolicy::FullAnswer {
                cache.store(key, full_answer);
            }
        })
    }

    /// Collect the whole answer to `question`
    pub async fn answer_text(&self, question: impl Into<String>) -> Result<String> {
        self.answer(question)
            .try_fold(String::new(), |mut text, fragment| async move {
                text.push_str(&fragment);
                Ok(text)
            })
            .await
    }
}
