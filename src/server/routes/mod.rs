//! HTTP route modules

pub mod rag;

use crate::server::handlers::health_check;
use actix_web::web;

/// Register every route of the gateway
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .configure(rag::configure_routes);
}
