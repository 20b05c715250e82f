//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::cache_manager::AnswerCache;
use crate::core::rag::RagHandler;
use crate::server::templates::TemplateRenderer;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Every field is behind an `Arc`, so cloning per worker is cheap.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Question answering with the answer cache
    pub rag: Arc<RagHandler>,
    /// Answer page renderer
    pub templates: Arc<TemplateRenderer>,
}

impl AppState {
    pub fn new(config: Config, rag: RagHandler, templates: TemplateRenderer) -> Self {
        Self {
            config: Arc::new(config),
            rag: Arc::new(rag),
            templates: Arc::new(templates),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The answer cache behind the handler
    pub fn cache(&self) -> &Arc<AnswerCache> {
        self.rag.cache()
    }
}
