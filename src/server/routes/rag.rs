//! Question answering endpoint

use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::debug;

/// Query string of `GET /rag`
#[derive(Debug, Deserialize)]
pub struct RagQuery {
    /// The question, passed through unchanged (empty is allowed)
    pub query: String,
}

/// Configure the RAG routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/rag")
            .app_data(web::QueryConfig::default().error_handler(|err, _req| {
                GatewayError::bad_request(err.to_string()).into()
            }))
            .route(web::get().to(rag)),
    );
}

/// Answer a question and render it into the answer page
pub async fn rag(
    state: web::Data<AppState>,
    params: web::Query<RagQuery>,
) -> Result<HttpResponse> {
    let query = params.into_inner().query;
    debug!(query_len = query.len(), "RAG query received");

    let answer = state.rag.answer_text(query.as_str()).await?;

    let html = state.templates.render_answer(&query, &answer)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}
