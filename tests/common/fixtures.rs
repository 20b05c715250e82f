//! Test fixtures

use rag_gateway::server::AppState;
use rag_gateway::{Config, HttpServer, LLMProvider};
use std::sync::Arc;

/// Default configuration without the stdout echo
pub fn quiet_config() -> Config {
    let mut config = Config::default();
    config.llm.echo_to_stdout = false;
    config
}

/// Application state wired to `provider`
pub fn state_with(config: &Config, provider: Arc<dyn LLMProvider>) -> AppState {
    HttpServer::with_provider(config, provider)
        .expect("server state")
        .state()
        .clone()
}

/// Percent-encode a query value
pub fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// `/rag` URI for `question`
pub fn rag_uri(question: &str) -> String {
    format!("/rag?query={}", encode(question))
}
