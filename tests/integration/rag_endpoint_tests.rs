//! `/rag` and `/health` over a stub provider

#[cfg(test)]
mod tests {
    use crate::common::fixtures::rag_uri;
    use crate::common::{CountingProvider, quiet_config, state_with};
    use actix_web::{http::StatusCode, test, web};
    use rag_gateway::HttpServer;
    use rag_gateway::config::CachePolicy;
    use std::sync::Arc;

    const QUESTION: &str = "What is the capital of France?";
    const ANSWER: &str = "Paris is the capital of France.";

    fn body_text(bytes: &[u8]) -> String {
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn test_answer_appears_exactly_once() {
        let provider = Arc::new(CountingProvider::new("unexpected").with_answer(QUESTION, ANSWER));
        let state = state_with(&quiet_config(), provider.clone());
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::get().uri(&rag_uri(QUESTION)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let html = body_text(&test::read_body(resp).await);
        assert_eq!(html.matches(ANSWER).count(), 1);
        assert!(html.contains(QUESTION));
        assert_eq!(provider.calls(), 1);
    }

    #[actix_web::test]
    async fn test_repeated_query_is_served_from_cache() {
        let provider = Arc::new(CountingProvider::new("unexpected").with_answer(QUESTION, ANSWER));
        let state = state_with(&quiet_config(), provider.clone());
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let first = test::call_and_read_body(
            &app,
            test::TestRequest::get().uri(&rag_uri(QUESTION)).to_request(),
        )
        .await;
        let second = test::call_and_read_body(
            &app,
            test::TestRequest::get().uri(&rag_uri(QUESTION)).to_request(),
        )
        .await;

        assert_eq!(provider.calls(), 1);
        assert_eq!(first, second);
        assert_eq!(body_text(&second).matches(ANSWER).count(), 1);
    }

    #[actix_web::test]
    async fn test_last_fragment_policy_serves_last_fragment_on_repeat() {
        let provider = Arc::new(CountingProvider::new("unexpected").with_answer(QUESTION, ANSWER));
        let mut config = quiet_config();
        config.cache.policy = CachePolicy::LastFragment;
        let state = state_with(&config, provider.clone());
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let first = test::call_and_read_body(
            &app,
            test::TestRequest::get().uri(&rag_uri(QUESTION)).to_request(),
        )
        .await;
        let second = test::call_and_read_body(
            &app,
            test::TestRequest::get().uri(&rag_uri(QUESTION)).to_request(),
        )
        .await;

        assert_eq!(provider.calls(), 1);
        assert!(body_text(&first).contains(ANSWER));
        assert!(!body_text(&second).contains(ANSWER));
        assert!(body_text(&second).contains("France."));
    }

    #[actix_web::test]
    async fn test_distinct_queries_are_answered_separately() {
        let provider = Arc::new(
            CountingProvider::new("unexpected")
                .with_answer("q1", "first answer")
                .with_answer("q2", "second answer"),
        );
        let state = state_with(&quiet_config(), provider.clone());
        let cache = state.cache().clone();
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let one = test::call_and_read_body(&app, test::TestRequest::get().uri("/rag?query=q1").to_request()).await;
        let two = test::call_and_read_body(&app, test::TestRequest::get().uri("/rag?query=q2").to_request()).await;

        assert!(body_text(&one).contains("first answer"));
        assert!(body_text(&two).contains("second answer"));
        assert_eq!(provider.calls(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[actix_web::test]
    async fn test_empty_query_passes_through() {
        let provider = Arc::new(CountingProvider::new("nothing was asked"));
        let state = state_with(&quiet_config(), provider.clone());
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        for _ in 0..2 {
            let req = test::TestRequest::get().uri("/rag?query=").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
            let html = body_text(&test::read_body(resp).await);
            assert!(html.contains("nothing was asked"));
        }
        assert_eq!(provider.calls(), 1);
    }

    #[actix_web::test]
    async fn test_missing_query_is_rejected_without_calling_the_provider() {
        let provider = Arc::new(CountingProvider::new("unused"));
        let state = state_with(&quiet_config(), provider.clone());
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/rag").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(provider.calls(), 0);
    }

    #[actix_web::test]
    async fn test_query_and_answer_are_html_escaped() {
        let provider = Arc::new(CountingProvider::new("use <em>care</em> & caution"));
        let state = state_with(&quiet_config(), provider);
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let html = body_text(
            &test::call_and_read_body(
                &app,
                test::TestRequest::get().uri(&rag_uri("<script>alert(1)</script>")).to_request(),
            )
            .await,
        );

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;em&gt;care&lt;/em&gt; &amp; caution"));
    }

    #[actix_web::test]
    async fn test_cache_disabled_calls_provider_every_time() {
        let provider = Arc::new(CountingProvider::new("fresh"));
        let mut config = quiet_config();
        config.cache.enabled = false;
        let state = state_with(&config, provider.clone());
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        for _ in 0..3 {
            let req = test::TestRequest::get().uri("/rag?query=same").to_request();
            assert!(test::call_service(&app, req).await.status().is_success());
        }
        assert_eq!(provider.calls(), 3);
    }

    #[actix_web::test]
    async fn test_non_streaming_mode() {
        let provider = Arc::new(CountingProvider::new("whole answer at once"));
        let mut config = quiet_config();
        config.llm.stream = false;
        let state = state_with(&config, provider.clone());
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let html = body_text(
            &test::call_and_read_body(&app, test::TestRequest::get().uri("/rag?query=x").to_request()).await,
        );
        assert!(html.contains("whole answer at once"));
        assert_eq!(provider.calls(), 1);
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let provider = Arc::new(CountingProvider::new("answer"));
        let state = state_with(&quiet_config(), provider);
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["cache"]["entries"], 0);
        assert_eq!(body["cache"]["hit_rate"], 0.0);
        assert!(body["git_hash"].as_str().is_some());
        assert!(body["timestamp"].as_str().is_some());
    }
}
