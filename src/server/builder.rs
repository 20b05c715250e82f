//! Server builder and run_server function

use crate::config::Config;
use crate::core::providers::LLMProvider;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    provider: Option<Arc<dyn LLMProvider>>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use `provider` instead of building the OpenAI provider from configuration
    pub fn with_provider(mut self, provider: Arc<dyn LLMProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;
        config.validate()?;

        match self.provider {
            Some(provider) => HttpServer::with_provider(&config, provider),
            None => HttpServer::new(&config).await,
        }
    }
}

/// Build and run the server until it is stopped
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting RAG gateway v{}", env!("CARGO_PKG_VERSION"));

    let server = ServerBuilder::new().with_config(config).build().await?;
    let address = server.config().address();

    info!("Server starting at: http://{}", address);
    info!("API Endpoints:");
    info!("   GET  /rag?query=... - Answer a question");
    info!("   GET  /health - Health check");

    server.start().await
}
