//! Live OpenAI round trips

#[cfg(test)]
mod tests {
    use crate::common::fixtures::rag_uri;
    use crate::common::quiet_config;
    use crate::skip_without_env;
    use actix_web::{http::StatusCode, test, web};
    use futures::StreamExt;
    use rag_gateway::core::providers::openai::{OpenAIConfig, OpenAIProvider};
    use rag_gateway::{ChatMessage, ChatRequest, HttpServer, LLMProvider};

    #[tokio::test]
    #[ignore]
    async fn test_live_stream() {
        skip_without_env!("OPENAI_API_KEY");

        let mut config = quiet_config();
        config.apply_env_overrides().unwrap();
        let provider = OpenAIProvider::new(OpenAIConfig::from(&config.llm), &config.proxy).unwrap();

        let request = ChatRequest::new(
            config.llm.model.clone(),
            vec![ChatMessage::user("Reply with the single word: pong")],
        )
        .with_max_tokens(16);

        let mut stream = provider.chat_completion_stream(request).await.unwrap();
        let mut answer = String::new();
        while let Some(chunk) = stream.next().await {
            if let Some(text) = chunk.unwrap().content() {
                answer.push_str(text);
            }
        }
        assert!(answer.to_lowercase().contains("pong"));
    }

    #[actix_web::test]
    #[ignore]
    async fn test_live_rag_page() {
        skip_without_env!("OPENAI_API_KEY");

        let mut config = quiet_config();
        config.apply_env_overrides().unwrap();
        let gateway = HttpServer::new(&config).await.unwrap();
        let app = test::init_service(HttpServer::create_app(web::Data::new(gateway.state().clone()))).await;

        let req = test::TestRequest::get()
            .uri(&rag_uri("What is the capital of France?"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(html.contains("Paris"));
    }
}
