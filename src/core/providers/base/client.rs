//! Shared HTTP client construction
//!
//! Every provider talks to its API through one pooled `reqwest::Client`
//! built here, with the configured timeout and proxies applied.

use crate::config::ProxyConfig;
use crate::core::providers::unified_provider::ProviderError;
use reqwest::{Client, Proxy};
use std::time::Duration;
use tracing::debug;

/// Idle keep-alive for pooled connections
const KEEPALIVE_SECS: u64 = 90;

/// Build an HTTP client for `provider`
///
/// System proxy detection is disabled; only proxies present in `proxy` are
/// used, so the configuration is the single source of truth.
pub fn build_http_client(
    provider: &'static str,
    timeout_secs: u64,
    proxy: &ProxyConfig,
) -> Result<Client, ProviderError> {
    let mut builder = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .pool_idle_timeout(Duration::from_secs(KEEPALIVE_SECS))
        .no_proxy();

    if let Some(http) = proxy.http.as_deref() {
        debug!(provider, proxy = http, "Using HTTP proxy");
        builder = builder.proxy(Proxy::http(http).map_err(|e| {
            ProviderError::configuration(provider, format!("Invalid HTTP proxy '{}': {}", http, e))
        })?);
    }

    if let Some(https) = proxy.https.as_deref() {
        debug!(provider, proxy = https, "Using HTTPS proxy");
        builder = builder.proxy(Proxy::https(https).map_err(|e| {
            ProviderError::configuration(provider, format!("Invalid HTTPS proxy '{}': {}", https, e))
        })?);
    }

    builder.build().map_err(|e| {
        ProviderError::configuration(provider, format!("Failed to create HTTP client: {}", e))
    })
}
