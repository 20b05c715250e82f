//! Error handling for the Gateway
//!
//! This module defines the gateway error type, its conversions and the
//! JSON error response returned to HTTP clients.

mod conversions;
mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{GatewayError, Result};
