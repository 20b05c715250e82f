//! OpenAI Provider Error Handling
//!
//! OpenAI uses the unified ProviderError with OpenAI-specific constructors.

pub use crate::core::providers::unified_provider::ProviderError as OpenAIError;

pub(crate) const PROVIDER: &str = "openai";

impl OpenAIError {
    pub fn openai_authentication(message: impl Into<String>) -> Self {
        Self::authentication(PROVIDER, message)
    }

    pub fn openai_network_error(message: impl Into<String>) -> Self {
        Self::network(PROVIDER, message)
    }

    pub fn openai_response_parsing(message: impl Into<String>) -> Self {
        Self::response_parsing(PROVIDER, message)
    }

    pub fn openai_configuration(message: impl Into<String>) -> Self {
        Self::configuration(PROVIDER, message)
    }

    /// Map a `reqwest` send/read failure
    pub fn openai_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout(PROVIDER, err.to_string())
        } else {
            Self::network(PROVIDER, err.to_string())
        }
    }

    /// Map an error response body (`{"error": {"message": ...}}`) and status
    pub fn openai_from_response(
        status: u16,
        body: &str,
        model: &str,
        retry_after: Option<u64>,
    ) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| {
                if body.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    body.to_string()
                }
            });

        Self::from_status(PROVIDER, status, message, model, retry_after)
    }
}
