//! Full stack: HTTP endpoint, OpenAI client and a mock upstream

#[cfg(test)]
mod tests {
    use crate::common::fixtures::rag_uri;
    use crate::common::quiet_config;
    use actix_web::{http::StatusCode, test, web};
    use rag_gateway::utils::error::ErrorResponse;
    use rag_gateway::{Config, HttpServer};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer, api_key: Option<&str>) -> Config {
        let mut config = quiet_config();
        config.llm.api_base = format!("{}/v1", server.uri());
        config.llm.api_key = api_key.map(str::to_string);
        config
    }

    fn sse_body(fragments: &[&str]) -> String {
        let mut body = String::new();
        for fragment in fragments {
            let chunk = json!({
                "id": "chatcmpl-1",
                "object": "chat.completion.chunk",
                "created": 1,
                "model": "gpt-3.5-turbo",
                "choices": [{"index": 0, "delta": {"content": fragment}, "finish_reason": null}]
            });
            body.push_str(&format!("data: {}\n\n", chunk));
        }
        body.push_str("data: [DONE]\n\n");
        body
    }

    fn event_stream(body: String) -> ResponseTemplate {
        ResponseTemplate::new(200)
            .insert_header("content-type", "text/event-stream")
            .set_body_string(body)
    }

    #[actix_web::test]
    async fn test_streamed_answer_is_rendered_and_cached() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "gpt-3.5-turbo",
                "max_tokens": 256,
                "stream": true,
                "messages": [
                    {"role": "system", "content": "You are a RAG application"},
                    {"role": "user", "content": "What is the capital of France?"}
                ]
            })))
            .respond_with(event_stream(sse_body(&["Paris", " is the capital", " of France."])))
            .expect(1)
            .mount(&server)
            .await;

        let config = config_for(&server, Some("sk-test"));
        let gateway = HttpServer::new(&config).await.unwrap();
        let app = test::init_service(HttpServer::create_app(web::Data::new(gateway.state().clone()))).await;

        for _ in 0..2 {
            let req = test::TestRequest::get()
                .uri(&rag_uri("What is the capital of France?"))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
            let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
            assert_eq!(html.matches("Paris is the capital of France.").count(), 1);
        }
    }

    #[actix_web::test]
    async fn test_upstream_rate_limit() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(429)
                    .insert_header("retry-after", "7")
                    .set_body_json(json!({"error": {"message": "Rate limit reached", "type": "requests"}})),
            )
            .mount(&server)
            .await;

        let gateway = HttpServer::new(&config_for(&server, Some("sk-test"))).await.unwrap();
        let app = test::init_service(HttpServer::create_app(web::Data::new(gateway.state().clone()))).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/rag?query=hi").to_request()).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.code, "PROVIDER_RATE_LIMIT");
    }

    #[actix_web::test]
    async fn test_malformed_stream_is_bad_gateway() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(event_stream("data: {not json}\n\n".to_string()))
            .expect(2)
            .mount(&server)
            .await;

        let gateway = HttpServer::new(&config_for(&server, Some("sk-test"))).await.unwrap();
        let cache = gateway.state().cache().clone();
        let app = test::init_service(HttpServer::create_app(web::Data::new(gateway.state().clone()))).await;

        for _ in 0..2 {
            let req = test::TestRequest::get().uri("/rag?query=hi").to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_GATEWAY);
        }
        assert!(cache.is_empty());
    }

    #[actix_web::test]
    async fn test_missing_api_key_is_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let gateway = HttpServer::new(&config_for(&server, None)).await.unwrap();
        let app = test::init_service(HttpServer::create_app(web::Data::new(gateway.state().clone()))).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/rag?query=hi").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.code, "PROVIDER_AUTH_ERROR");
    }

    #[actix_web::test]
    async fn test_non_streaming_completion() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(json!({"stream": false})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-2",
                "object": "chat.completion",
                "created": 1,
                "model": "gpt-3.5-turbo",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "Four."},
                    "finish_reason": "stop"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = config_for(&server, Some("sk-test"));
        config.llm.stream = false;
        let gateway = HttpServer::new(&config).await.unwrap();
        let app = test::init_service(HttpServer::create_app(web::Data::new(gateway.state().clone()))).await;

        let html = test::call_and_read_body(&app, test::TestRequest::get().uri(&rag_uri("2+2?")).to_request()).await;
        assert!(String::from_utf8(html.to_vec()).unwrap().contains("Four."));
    }

    #[actix_web::test]
    async fn test_empty_org_id_from_env_does_not_block_startup() {
        let server = MockServer::start().await;
        let mut config = config_for(&server, Some("sk-test"));
        config
            .apply_env_overrides_from(|name| (name == "OPENAI_ORG_ID").then(String::new))
            .unwrap();

        let gateway = HttpServer::new(&config).await;
        assert!(gateway.is_ok());
    }
}
