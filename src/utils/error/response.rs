//! HTTP response handling for errors

use super::types::GatewayError;
use crate::core::providers::unified_provider::ProviderError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl GatewayError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            GatewayError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            GatewayError::Provider(provider_error) => match provider_error {
                ProviderError::Authentication { .. } => {
                    (StatusCode::UNAUTHORIZED, "PROVIDER_AUTH_ERROR")
                }
                ProviderError::RateLimit { .. } => {
                    (StatusCode::TOO_MANY_REQUESTS, "PROVIDER_RATE_LIMIT")
                }
                ProviderError::ModelNotFound { .. } => (StatusCode::NOT_FOUND, "MODEL_NOT_FOUND"),
                ProviderError::InvalidRequest { .. } => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
                ProviderError::Timeout { .. } => (StatusCode::GATEWAY_TIMEOUT, "PROVIDER_TIMEOUT"),
                ProviderError::Configuration { .. } => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "PROVIDER_CONFIG_ERROR")
                }
                _ => (StatusCode::BAD_GATEWAY, "PROVIDER_ERROR"),
            },
            GatewayError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            GatewayError::HttpClient(_) => (StatusCode::BAD_GATEWAY, "NETWORK_ERROR"),
            GatewayError::Template(_) => (StatusCode::INTERNAL_SERVER_ERROR, "TEMPLATE_ERROR"),
            GatewayError::Serialization(_) | GatewayError::Yaml(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "SERIALIZATION_ERROR")
            }
            GatewayError::Io(_) | GatewayError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        self.status_and_code().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code) = self.status_and_code();

        // Internal details stay in the logs
        let message = match self {
            GatewayError::Io(_) | GatewayError::Internal(_) => {
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
                request_id: None,
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
    pub request_id: Option<String>,
}
