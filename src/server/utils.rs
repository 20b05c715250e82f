//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::GatewayError;
use std::io::ErrorKind;

impl HttpServer {
    /// Format a user-friendly error message for port binding failures
    pub(crate) fn format_bind_error(error: std::io::Error, bind_addr: &str, port: u16) -> GatewayError {
        match error.kind() {
            ErrorKind::AddrInUse => GatewayError::server(format!(
                "Port {} is already in use. Stop the other process or start with --port {}",
                port,
                port.saturating_add(1)
            )),
            ErrorKind::PermissionDenied => GatewayError::server(format!(
                "Permission denied for port {}. Use a port >= 1024 or run with elevated privileges",
                port
            )),
            _ => GatewayError::server(format!("Failed to bind to {}: {}", bind_addr, error)),
        }
    }
}
