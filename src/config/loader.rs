//! Configuration loading utilities
//!
//! Environment overrides applied on top of the file configuration.

use super::Config;
use super::models::CachePolicy;
use crate::utils::error::{GatewayError, Result};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| GatewayError::Config(format!("Invalid {}: {}", name, e)))
}

/// First non-empty value among `names`
fn first_of(lookup: &impl Fn(&str) -> Option<String>, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.is_empty())
}

impl Config {
    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_env_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides using `lookup` to resolve variable names
    pub fn apply_env_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        debug!("Applying environment overrides");

        // Server configuration
        if let Some(host) = lookup("GATEWAY_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("GATEWAY_PORT") {
            self.server.port = parse_var("GATEWAY_PORT", &port)?;
        }
        if let Some(workers) = lookup("GATEWAY_WORKERS") {
            self.server.workers = Some(parse_var("GATEWAY_WORKERS", &workers)?);
        }

        // LLM configuration
        if let Some(api_key) = lookup("OPENAI_API_KEY").filter(|key| !key.is_empty()) {
            self.llm.api_key = Some(api_key);
        }
        if let Some(api_base) = lookup("OPENAI_API_BASE") {
            self.llm.api_base = api_base;
        }
        if let Some(org) = lookup("OPENAI_ORG_ID").filter(|org| !org.is_empty()) {
            self.llm.organization = Some(org);
        }
        if let Some(model) = lookup("OPENAI_MODEL") {
            self.llm.model = model;
        }
        if let Some(max_tokens) = lookup("OPENAI_MAX_TOKENS") {
            self.llm.max_tokens = parse_var("OPENAI_MAX_TOKENS", &max_tokens)?;
        }

        // Proxy configuration
        if let Some(http) = first_of(&lookup, &["http_proxy", "HTTP_PROXY"]) {
            self.proxy.http = Some(http);
        }
        if let Some(https) = first_of(&lookup, &["https_proxy", "HTTPS_PROXY"]) {
            self.proxy.https = Some(https);
        }

        // Cache configuration
        if let Some(policy) = lookup("RAG_CACHE_POLICY") {
            self.cache.policy = CachePolicy::from_str(&policy).map_err(GatewayError::Config)?;
        }

        // Template configuration
        if let Some(dir) = lookup("RAG_TEMPLATE_DIR").filter(|dir| !dir.is_empty()) {
            self.template.dir = Some(PathBuf::from(dir));
        }

        Ok(())
    }
}
