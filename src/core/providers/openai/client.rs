//! OpenAI Provider Client Implementation
//!
//! Issues chat completion requests and exposes the response as a chunk stream.

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, header::RETRY_AFTER};
use tracing::{debug, warn};

use super::{
    config::OpenAIConfig,
    error::{OpenAIError, PROVIDER},
    streaming::create_openai_stream,
    transformer::{OpenAIRequestTransformer, OpenAIResponseTransformer},
};
use crate::config::ProxyConfig;
use crate::core::providers::base::build_http_client;
use crate::core::providers::{ChatStream, LLMProvider};
use crate::core::types::{ChatRequest, ChatResponse};

/// OpenAI Provider implementation
#[derive(Debug, Clone)]
pub struct OpenAIProvider {
    config: OpenAIConfig,
    client: reqwest::Client,
}

impl OpenAIProvider {
    /// Create new OpenAI provider
    pub fn new(config: OpenAIConfig, proxy: &ProxyConfig) -> Result<Self, OpenAIError> {
        config.validate().map_err(OpenAIError::openai_configuration)?;

        if config.api_key.is_none() {
            warn!("No OpenAI API key configured; completion requests will be rejected");
        }

        let client = build_http_client(PROVIDER, config.timeout, proxy)?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &OpenAIConfig {
        &self.config
    }

    /// Build an authorized POST to the chat completions endpoint
    fn chat_request(&self, body: &serde_json::Value) -> Result<RequestBuilder, OpenAIError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| OpenAIError::openai_authentication("API key not configured"))?;

        let mut req = self
            .client
            .post(self.config.chat_completions_url())
            .bearer_auth(api_key)
            .json(body);

        if let Some(org) = &self.config.organization {
            req = req.header("OpenAI-Organization", org);
        }

        Ok(req)
    }

    async fn send(&self, request: &ChatRequest) -> Result<Response, OpenAIError> {
        let body = OpenAIRequestTransformer::transform(request);
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            stream = request.stream,
            "Sending OpenAI chat completion request"
        );

        let response = self
            .chat_request(&body)?
            .send()
            .await
            .map_err(|e| OpenAIError::openai_transport(&e))?;

        check_status(response, &request.model).await
    }
}

/// Turn a non-success response into the matching provider error
async fn check_status(response: Response, model: &str) -> Result<Response, OpenAIError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let retry_after = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());
    let body = response.text().await.unwrap_or_default();

    warn!(status = status.as_u16(), model, "OpenAI request failed");
    Err(OpenAIError::openai_from_response(
        status.as_u16(),
        &body,
        model,
        retry_after,
    ))
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn chat_completion_stream(&self, request: ChatRequest) -> Result<ChatStream, OpenAIError> {
        let request = request.with_stream(true);
        let response = self.send(&request).await?;
        Ok(Box::pin(create_openai_stream(response.bytes_stream())))
    }

    async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse, OpenAIError> {
        let request = request.with_stream(false);
        let response = self.send(&request).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| OpenAIError::openai_transport(&e))?;
        OpenAIResponseTransformer::transform(&body)
    }
}
