//! Configuration loading integration tests
//!
//! Loads YAML files from disk and checks validation failures surface as
//! configuration errors.

#[cfg(test)]
mod tests {
    use course_eval_client::{ApiClient, ClientConfig, ClientError, Validate};
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    fn yaml_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_full_config_from_file() {
        let file = yaml_file(
            r#"
base_url: "https://eval.example.edu/api"
timeout_secs: 20
max_retries: 4
retry_delay_ms: 1500
login_route: "/signin"
user_agent: "dashboard/1.2"
default_headers:
  X-Term: "2024-fall"
mutation_limit:
  max_requests: 5
  time_window_secs: 10
  block_duration_secs: 15
"#,
        );

        let config = ClientConfig::from_file(file.path()).await.unwrap();

        assert_eq!(config.base_url, "https://eval.example.edu/api");
        assert_eq!(config.timeout(), Duration::from_secs(20));
        assert_eq!(config.retry().max_retries, 4);
        assert_eq!(config.retry().retry_delay, Duration::from_millis(1500));
        assert_eq!(config.login_route, "/signin");
        assert_eq!(config.http().user_agent, "dashboard/1.2");
        assert_eq!(
            config.default_headers.get("X-Term").map(String::as_str),
            Some("2024-fall")
        );

        let policy = config.mutation_limit.policy();
        assert_eq!(policy.max_requests, 5);
        assert_eq!(policy.time_window, Duration::from_secs(10));
        assert_eq!(policy.block_duration, Duration::from_secs(15));

        assert!(ApiClient::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_partial_config_uses_defaults() {
        let file = yaml_file("base_url: \"http://127.0.0.1:9000\"\n");

        let config = ClientConfig::from_file(file.path()).await.unwrap();

        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout_secs, 45);
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.retry_delay_ms, 3000);
        assert_eq!(config.mutation_limit.max_requests, 20);
        assert_eq!(config.mutation_limit.time_window_secs, 60);
        assert_eq!(config.mutation_limit.block_duration_secs, 30);
    }

    #[tokio::test]
    async fn test_unsupported_scheme_rejected() {
        let file = yaml_file("base_url: \"ftp://files.example.edu\"\n");

        let result = ClientConfig::from_file(file.path()).await;

        assert!(matches!(result, Err(ClientError::Config(msg)) if msg.contains("base_url")));
    }

    #[tokio::test]
    async fn test_zero_mutation_limit_rejected() {
        let file = yaml_file("mutation_limit:\n  max_requests: 0\n");

        let result = ClientConfig::from_file(file.path()).await;

        assert!(matches!(result, Err(ClientError::Config(msg)) if msg.contains("max_requests")));
    }

    #[tokio::test]
    async fn test_unbounded_block_duration_rejected() {
        let file = yaml_file(
            "mutation_limit:\n  max_requests: 1\n  block_duration_secs: 18446744073709551615\n",
        );

        let result = ClientConfig::from_file(file.path()).await;

        assert!(
            matches!(result, Err(ClientError::Config(msg)) if msg.contains("block_duration_secs"))
        );
    }

    #[tokio::test]
    async fn test_malformed_yaml_is_yaml_error() {
        let file = yaml_file("timeout_secs: [not, a, number]\n");

        let result = ClientConfig::from_file(file.path()).await;

        assert!(matches!(result, Err(ClientError::Yaml(_))));
    }

    #[tokio::test]
    async fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = ClientConfig::from_file(dir.path().join("absent.yaml")).await;

        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn test_default_config_validates() {
        assert!(ClientConfig::default().validate().is_ok());
    }
}
