//! OpenAI Request and Response Transformers
//!
//! Conversion between the gateway's chat types and the OpenAI wire format.

use serde::Deserialize;
use serde_json::{Value, json};

use super::error::OpenAIError;
use crate::core::types::{
    ChatChoice, ChatMessage, ChatRequest, ChatResponse, FinishReason, MessageRole, Usage,
};

/// OpenAI Request Transformer
pub struct OpenAIRequestTransformer;

impl OpenAIRequestTransformer {
    /// Transform ChatRequest to the OpenAI JSON body
    pub fn transform(request: &ChatRequest) -> Value {
        let mut body = json!({
            "model": request.model,
            "messages": request.messages,
            "stream": request.stream,
        });

        if let Some(max_tokens) = request.max_tokens {
            body["max_tokens"] = Value::from(max_tokens);
        }

        if let Some(number) = request
            .temperature
            .and_then(|t| serde_json::Number::from_f64(t as f64))
        {
            body["temperature"] = Value::Number(number);
        }

        body
    }
}

#[derive(Debug, Deserialize)]
struct OpenAIChatResponse {
    #[serde(default)]
    id: String,
    #[serde(default)]
    model: String,
    choices: Vec<OpenAIChoice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    #[serde(default)]
    index: u32,
    message: OpenAIMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIMessage {
    role: Option<MessageRole>,
    content: Option<String>,
}

/// OpenAI Response Transformer
pub struct OpenAIResponseTransformer;

impl OpenAIResponseTransformer {
    /// Parse a non-streamed completion body
    pub fn transform(body: &[u8]) -> Result<ChatResponse, OpenAIError> {
        let response: OpenAIChatResponse = serde_json::from_slice(body)
            .map_err(|e| OpenAIError::openai_response_parsing(e.to_string()))?;

        let choices = response
            .choices
            .into_iter()
            .map(|choice| ChatChoice {
                index: choice.index,
                message: ChatMessage::new(
                    choice.message.role.unwrap_or(MessageRole::Assistant),
                    choice.message.content.unwrap_or_default(),
                ),
                finish_reason: choice.finish_reason.as_deref().and_then(FinishReason::parse),
            })
            .collect();

        Ok(ChatResponse {
            id: response.id,
            model: response.model,
            choices,
            usage: response.usage,
        })
    }
}
