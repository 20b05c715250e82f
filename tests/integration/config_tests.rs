//! Configuration loading from files and the environment

#[cfg(test)]
mod tests {
    use rag_gateway::Config;
    use rag_gateway::config::CachePolicy;
    use std::collections::HashMap;
    use std::io::Write;
    use std::path::PathBuf;

    fn example_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/gateway.yaml.example")
    }

    #[tokio::test]
    async fn test_example_file_matches_defaults() {
        let config = Config::from_file(example_path()).await.unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
server:
  host: 127.0.0.1
  port: 9100
  workers: 2
llm:
  api_base: http://localhost:8080/v1
  model: gpt-4o-mini
  max_tokens: 64
  temperature: 0.2
  stream: false
  system_prompt: Answer briefly
  echo_to_stdout: false
proxy:
  https: http://127.0.0.1:7890
cache:
  enabled: false
  policy: last_fragment
logging:
  level: debug
  json: true
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.server.address(), "127.0.0.1:9100");
        assert_eq!(config.server.worker_count(), 2);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.max_tokens, 64);
        assert_eq!(config.llm.temperature, Some(0.2));
        assert!(!config.llm.stream);
        assert_eq!(config.llm.system_prompt, "Answer briefly");
        assert_eq!(config.proxy.https.as_deref(), Some("http://127.0.0.1:7890"));
        assert!(config.proxy.http.is_none());
        assert!(!config.cache.enabled);
        assert_eq!(config.cache.policy, CachePolicy::LastFragment);
        assert!(config.logging.json);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::from_file(dir.path().join("absent.yaml")).await.is_err());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Config::from_yaml("llm:\n  api_base: not-a-url\n").is_err());
        assert!(Config::from_yaml("llm:\n  temperature: 3.5\n").is_err());
        assert!(Config::from_yaml("cache:\n  policy: lru\n").is_err());
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = Config::from_yaml("llm:\n  model: from-file\n").unwrap();
        let env: HashMap<&str, &str> = [
            ("OPENAI_MODEL", "from-env"),
            ("OPENAI_API_KEY", "sk-env"),
            ("HTTPS_PROXY", "http://upper:1"),
            ("https_proxy", "http://lower:1"),
            ("RAG_CACHE_POLICY", "last_fragment"),
        ]
        .into_iter()
        .collect();

        config
            .apply_env_overrides_from(|name| env.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.llm.model, "from-env");
        assert!(config.llm.has_api_key());
        assert_eq!(config.proxy.https.as_deref(), Some("http://lower:1"));
        assert_eq!(config.cache.policy, CachePolicy::LastFragment);
        config.validate().unwrap();
    }

    #[test]
    fn test_api_key_is_not_serialized() {
        let mut config = Config::default();
        config.llm.api_key = Some("sk-secret".to_string());
        let yaml = config.to_yaml().unwrap();
        assert!(!yaml.contains("sk-secret"));
    }
}
