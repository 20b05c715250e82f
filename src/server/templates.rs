//! Answer page rendering

use crate::config::TemplateConfig;
use crate::utils::error::{GatewayError, Result};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::{debug, info};

/// Page used when no template directory is configured
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/index.html");

#[derive(Serialize)]
struct AnswerContext<'a> {
    request: &'a str,
    response: &'a str,
}

/// Renders the answer page
///
/// Strict mode is on, so a template referencing an unknown variable fails to
/// render instead of silently printing nothing. Both variables are
/// HTML-escaped.
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
    name: String,
}

impl TemplateRenderer {
    /// Register `source` under `name`
    pub fn from_source(name: impl Into<String>, source: &str) -> Result<Self> {
        let name = name.into();
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_template_string(&name, source)?;
        Ok(Self { registry, name })
    }

    /// Load the configured template, falling back to the embedded page
    pub fn from_config(config: &TemplateConfig) -> Result<Self> {
        match config.path() {
            Some(path) => {
                info!("Loading template from {}", path.display());
                let source = std::fs::read_to_string(&path).map_err(|e| {
                    GatewayError::template(format!(
                        "Failed to read template {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                Self::from_source(config.name.clone(), &source)
            }
            None => {
                debug!("Using embedded template");
                Self::from_source(config.name.clone(), DEFAULT_TEMPLATE)
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the page for a question and its answer
    pub fn render_answer(&self, request: &str, response: &str) -> Result<String> {
        let html = self
            .registry
            .render(&self.name, &AnswerContext { request, response })?;
        Ok(html)
    }
}

impl std::fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRenderer")
            .field("name", &self.name)
            .finish()
    }
}
