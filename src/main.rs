//! eval-client - send one request through the resilient API client
//!
//! Diagnostic CLI over the course evaluation backend

#![allow(missing_docs)]

use anyhow::Context;
use clap::Parser;
use course_eval_client::{ApiClient, ApiRequest, ClientConfig, Validate, init_logging};
use reqwest::Method;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "eval-client", version, about = "Send one request to the course evaluation API")]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "COURSE_EVAL_API_URL")]
    base_url: Option<String>,

    /// YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bearer token to attach
    #[arg(long, env = "COURSE_EVAL_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// HTTP method
    method: String,

    /// Path relative to the base URL
    path: String,

    /// JSON request body
    #[arg(long)]
    data: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.json_logs);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::from_file(path)
            .await
            .with_context(|| format!("loading {}", path.display()))?,
        None => ClientConfig::from_env().context("loading configuration from environment")?,
    };
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
        config.validate()?;
    }
    debug!(?config, "Configuration resolved");

    let method = Method::from_bytes(cli.method.to_uppercase().as_bytes())
        .with_context(|| format!("invalid HTTP method '{}'", cli.method))?;
    let mut request = ApiRequest::new(method, cli.path);
    if let Some(data) = cli.data {
        let body: serde_json::Value =
            serde_json::from_str(&data).context("--data must be valid JSON")?;
        request = request.json(body);
    }

    let client = ApiClient::new(&config)?;
    if let Some(token) = cli.token {
        client.session().set_token(token);
    }

    match client.execute_json(request).await {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{}", serde_json::to_string_pretty(&e.to_payload())?);
            Ok(ExitCode::FAILURE)
        }
    }
}
