//! Utility modules for the Gateway
//!
//! - **error**: gateway error type and its HTTP mapping
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;
