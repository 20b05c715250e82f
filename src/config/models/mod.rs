//! Configuration data models
//!
//! One structure per section of the gateway configuration file.

pub mod cache;
pub mod llm;
pub mod logging;
pub mod proxy;
pub mod server;
pub mod template;

pub use cache::*;
pub use llm::*;
pub use logging::*;
pub use proxy::*;
pub use server::*;
pub use template::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default OpenAI-compatible API base
pub fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

pub fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

/// Default upper bound on generated tokens
pub fn default_max_tokens() -> u32 {
    256
}

/// Default upstream request timeout in seconds
pub fn default_timeout() -> u64 {
    60
}

pub fn default_system_prompt() -> String {
    "You are a RAG application".to_string()
}

pub fn default_template_name() -> String {
    "index.html".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
