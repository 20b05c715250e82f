//! Unified Provider Error Handling
//!
//! Single error type for LLM providers.
//!
//! | Variant | Purpose | HTTP Status |
//! |------|------|------------|
//! | Authentication | Missing or rejected credential | 401 |
//! | RateLimit | Rate limit exceeded | 429 |
//! | ModelNotFound | Model not found | 404 |
//! | InvalidRequest | Invalid request | 400 |
//! | Network | Network error | 502 |
//! | Timeout | Timeout | 504 |
//! | ApiError | Any other non-2xx status | 502 |
//! | ResponseParsing | Malformed upstream payload | 502 |
//! | Configuration | Provider misconfiguration | 500 |
//! | Other | Other error | 502 |
//!
//! ```rust,ignore
//! use rag_gateway::ProviderError;
//!
//! let err = ProviderError::authentication("openai", "Invalid API key");
//! assert_eq!(err.http_status(), 401);
//! ```

/// Unified provider error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("Authentication failed for {provider}: {message}")]
    Authentication {
        provider: &'static str,
        message: String,
    },

    #[error("Rate limit exceeded for {provider}: {message}")]
    RateLimit {
        provider: &'static str,
        message: String,
        retry_after: Option<u64>,
    },

    #[error("Model '{model}' not found for {provider}")]
    ModelNotFound {
        provider: &'static str,
        model: String,
    },

    #[error("Invalid request for {provider}: {message}")]
    InvalidRequest {
        provider: &'static str,
        message: String,
    },

    #[error("Network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("Timeout for {provider}: {message}")]
    Timeout {
        provider: &'static str,
        message: String,
    },

    #[error("API error for {provider} (status {status}): {message}")]
    ApiError {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("Failed to parse {provider} response: {message}")]
    ResponseParsing {
        provider: &'static str,
        message: String,
    },

    #[error("Configuration error for {provider}: {message}")]
    Configuration {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} error: {message}")]
    Other {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    pub fn authentication(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Authentication {
            provider,
            message: message.into(),
        }
    }

    pub fn rate_limit(provider: &'static str, retry_after: Option<u64>) -> Self {
        let message = match retry_after {
            Some(secs) => format!("retry after {} seconds", secs),
            None => "rate limit exceeded".to_string(),
        };
        Self::RateLimit {
            provider,
            message,
            retry_after,
        }
    }

    pub fn model_not_found(provider: &'static str, model: impl Into<String>) -> Self {
        Self::ModelNotFound {
            provider,
            model: model.into(),
        }
    }

    pub fn invalid_request(provider: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            provider,
            message: message.into(),
        }
    }

    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    pub fn timeout(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Timeout {
            provider,
            message: message.into(),
        }
    }

    pub fn api_error(provider: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            provider,
            status,
            message: message.into(),
        }
    }

    pub fn response_parsing(provider: &'static str, message: impl Into<String>) -> Self {
        Self::ResponseParsing {
            provider,
            message: message.into(),
        }
    }

    pub fn configuration(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            provider,
            message: message.into(),
        }
    }

    pub fn other(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Other {
            provider,
            message: message.into(),
        }
    }

    /// Name of the provider that produced the error
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Authentication { provider, .. }
            | Self::RateLimit { provider, .. }
            | Self::ModelNotFound { provider, .. }
            | Self::InvalidRequest { provider, .. }
            | Self::Network { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::ApiError { provider, .. }
            | Self::ResponseParsing { provider, .. }
            | Self::Configuration { provider, .. }
            | Self::Other { provider, .. } => provider,
        }
    }

    /// HTTP status this error maps to when surfaced to gateway clients
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Authentication { .. } => 401,
            Self::RateLimit { .. } => 429,
            Self::ModelNotFound { .. } => 404,
            Self::InvalidRequest { .. } => 400,
            Self::Timeout { .. } => 504,
            Self::Configuration { .. } => 500,
            Self::Network { .. }
            | Self::ApiError { .. }
            | Self::ResponseParsing { .. }
            | Self::Other { .. } => 502,
        }
    }

    /// Map a non-success upstream HTTP status to a provider error
    pub fn from_status(
        provider: &'static str,
        status: u16,
        message: impl Into<String>,
        model: &str,
        retry_after: Option<u64>,
    ) -> Self {
        let message = message.into();
        match status {
            401 | 403 => Self::authentication(provider, message),
            404 => Self::model_not_found(provider, model),
            429 => Self::RateLimit {
                provider,
                message,
                retry_after,
            },
            400 | 422 => Self::invalid_request(provider, message),
            408 | 504 => Self::timeout(provider, message),
            _ => Self::api_error(provider, status, message),
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        Self::response_parsing("unknown", err.to_string())
    }
}
