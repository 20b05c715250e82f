//! HTTP server implementation
//!
//! This module provides the HTTP server, its shared state and the routes.

pub mod builder;
mod handlers;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;
mod utils;


pub use builder::{ServerBuilder, run_server};
pub use server::HttpServer;
pub use state::AppState;
pub use templates::TemplateRenderer;
