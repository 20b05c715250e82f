//! Section validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;
use url::Url;

/// Check that `value` parses as an `http://` or `https://` URL
pub fn validate_http_url(value: &str, context: &str) -> Result<(), String> {
    let url = Url::parse(value).map_err(|e| format!("{} has invalid URL format: {}", context, e))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(format!(
            "{} must use http:// or https:// scheme, got: {}",
            context, scheme
        )),
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating server configuration");

        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if self.workers == Some(0) {
            return Err("Worker count must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LlmConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating LLM configuration");

        validate_http_url(&self.api_base, "llm.api_base")?;

        if self.model.trim().is_empty() {
            return Err("Model name cannot be empty".to_string());
        }

        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }

        if self.timeout == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(format!(
                    "Temperature must be between 0.0 and 2.0, got {}",
                    temperature
                ));
            }
        }

        Ok(())
    }
}

impl Validate for ProxyConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(http) = &self.http {
            validate_http_url(http, "proxy.http")?;
        }
        if let Some(https) = &self.https {
            validate_http_url(https, "proxy.https")?;
        }
        Ok(())
    }
}

impl Validate for TemplateConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Template name cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
