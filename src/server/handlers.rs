//! HTTP route handlers

use crate::build_info;
use crate::core::cache_manager::CacheStats;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::debug;

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    pub git_hash: &'static str,
    pub cache: CacheStats,
}

/// Health check endpoint handler
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let build = build_info();
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: build.version,
        git_hash: build.git_hash,
        cache: state.cache().stats(),
    })
}
