//! Helper functions for creating specific error types

use super::types::GatewayError;

impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn template<S: Into<String>>(message: S) -> Self {
        Self::Template(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the error originated upstream at the LLM provider
    pub fn is_provider_error(&self) -> bool {
        matches!(self, Self::Provider(_) | Self::HttpClient(_))
    }
}
