//! OpenAI Provider Configuration

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::LlmConfig;

/// Default OpenAI API base URL
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// OpenAI provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIConfig {
    /// API key; absence is only reported when a request is made
    pub api_key: Option<String>,
    /// API base URL
    pub api_base: String,
    /// Organization ID (optional)
    pub organization: Option<String>,
    /// Request timeout in seconds
    pub timeout: u64,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            organization: None,
            timeout: 60,
        }
    }
}

impl OpenAIConfig {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.api_base)
            .map_err(|e| format!("Invalid API base '{}': {}", self.api_base, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!("API base must use http or https, got: {}", url.scheme()));
        }

        if self.timeout == 0 {
            return Err("Timeout cannot be 0".to_string());
        }

        if let Some(ref org) = self.organization {
            if org.is_empty() {
                return Err("Organization ID cannot be empty".to_string());
            }
        }

        Ok(())
    }

    /// Get the effective API base URL without a trailing slash
    pub fn get_api_base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }

    /// Chat completions endpoint
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.get_api_base())
    }
}

impl From<&LlmConfig> for OpenAIConfig {
    fn from(llm: &LlmConfig) -> Self {
        Self {
            api_key: llm.api_key.clone().filter(|key| !key.is_empty()),
            api_base: llm.api_base.clone(),
            organization: llm.organization.clone().filter(|org| !org.is_empty()),
            timeout: llm.timeout,
        }
    }
}
