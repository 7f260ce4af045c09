use super::types::HttpClientConfig;
use crate::utils::error::{ClientError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder};

pub struct ClientUtils;

impl ClientUtils {
    pub fn create_http_client(config: &HttpClientConfig) -> Result<Client> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            headers.insert(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }

        ClientBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::config(format!("Failed to create HTTP client: {}", e)))
    }

    /// Appends a path to an API base URL
    pub fn add_path_to_api_base(api_base: &str, ending_path: &str) -> String {
        let base = api_base.trim_end_matches('/');
        let path = ending_path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Validates a base URL: must parse and use http or https
    pub fn validate_url(url: &str) -> Result<()> {
        let parsed = url::Url::parse(url)?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ClientError::config(format!(
                "Unsupported URL scheme '{}' in {}",
                scheme, url
            ))),
        }
    }

    /// Builds the absolute URL of `path` under `base_url`
    pub fn build_url(base_url: &str, path: &str) -> Result<url::Url> {
        Ok(url::Url::parse(&Self::add_path_to_api_base(base_url, path))?)
    }
}
