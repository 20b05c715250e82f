//! Type conversions for GatewayError

use super::types::GatewayError;
use crate::core::providers::unified_provider::ProviderError;

impl From<ProviderError> for GatewayError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Configuration { provider, message } => {
                GatewayError::Config(format!("{}: {}", provider, message))
            }
            other => GatewayError::Provider(other),
        }
    }
}

impl From<handlebars::RenderError> for GatewayError {
    fn from(err: handlebars::RenderError) -> Self {
        GatewayError::Template(err.to_string())
    }
}

impl From<handlebars::TemplateError> for GatewayError {
    fn from(err: handlebars::TemplateError) -> Self {
        GatewayError::Template(err.to_string())
    }
}
