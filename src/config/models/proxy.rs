//! Outbound proxy configuration

use serde::{Deserialize, Serialize};

/// Proxies applied to the upstream HTTP client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Proxy for `http://` targets
    #[serde(default)]
    pub http: Option<String>,
    /// Proxy for `https://` targets
    #[serde(default)]
    pub https: Option<String>,
}

impl ProxyConfig {
    pub fn is_empty(&self) -> bool {
        self.http.is_none() && self.https.is_none()
    }
}
