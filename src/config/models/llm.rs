//! LLM provider configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Settings for the upstream chat completion API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    /// API key, usually supplied through `OPENAI_API_KEY`
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default)]
    pub temperature: Option<f32>,
    /// Request a streamed completion
    #[serde(default = "default_true")]
    pub stream: bool,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// System message placed before every question
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    /// Echo streamed fragments to standard output
    #[serde(default = "default_true")]
    pub echo_to_stdout: bool,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_api_base(),
            organization: None,
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: None,
            stream: true,
            timeout: default_timeout(),
            system_prompt: default_system_prompt(),
            echo_to_stdout: true,
        }
    }
}

impl LlmConfig {
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}
