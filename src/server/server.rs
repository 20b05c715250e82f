//! HTTP server core implementation

use crate::config::{Config, ServerConfig};
use crate::core::cache_manager::AnswerCache;
use crate::core::providers::LLMProvider;
use crate::core::providers::openai::{OpenAIConfig, OpenAIProvider};
use crate::core::rag::RagHandler;
use crate::server::routes;
use crate::server::state::AppState;
use crate::server::templates::TemplateRenderer;
use crate::utils::error::{GatewayError, Result};
use actix_web::{App, HttpServer as ActixHttpServer, middleware::DefaultHeaders, web};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server backed by the OpenAI provider
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        if !config.llm.has_api_key() {
            warn!("OPENAI_API_KEY is not set; /rag requests will fail with an authentication error");
        }

        let provider = OpenAIProvider::new(OpenAIConfig::from(&config.llm), &config.proxy)?;
        Self::with_provider(config, Arc::new(provider))
    }

    /// Create a server around an existing provider
    pub fn with_provider(config: &Config, provider: Arc<dyn LLMProvider>) -> Result<Self> {
        let cache = Arc::new(AnswerCache::new());
        let rag = RagHandler::from_config(provider, cache, config);
        let templates = TemplateRenderer::from_config(&config.template)?;

        info!(
            model = %config.llm.model,
            cache_enabled = config.cache.enabled,
            cache_policy = %config.cache.policy,
            "RAG handler ready"
        );

        Ok(Self {
            config: config.server.clone(),
            state: AppState::new(config.clone(), rag, templates),
        })
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(state)
            .wrap(TracingLogger::default())
            .wrap(DefaultHeaders::new().add(("Server", "rag-gateway")))
            .configure(routes::configure_routes)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let port = self.config.port;
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {} with {} workers", bind_addr, workers);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr, port))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
