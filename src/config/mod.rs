//! Configuration management for the API client
//!
//! This module handles loading and validation of client configuration.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{ClientError, Result};
use std::path::Path;
use tracing::{debug, info};

impl ClientConfig {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ClientError::config(format!("Failed to read config file: {}", e)))?;

        let config: ClientConfig = serde_yaml::from_str(&content)?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from the environment, reading `.env` first when present
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {:?}", path);
        }

        let config = ClientConfig::default().with_env_overrides()?;
        config.validate()?;
        Ok(config)
    }
}
