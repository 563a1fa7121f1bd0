//! # StudentHub CLI
//!
//! Command-line front end for the StudentHub API.

use clap::Parser;

mod commands;
mod config;
mod telemetry;

use config::AppConfig;
use studenthub_client::ApiClient;
use telemetry::TelemetryConfig;

#[derive(Debug, Parser)]
#[command(name = "studenthub", version, about = "StudentHub command-line client")]
struct Cli {
    /// Backend origin (overrides STUDENTHUB_API_URL).
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Bearer token (overrides STUDENTHUB_TOKEN).
    #[arg(long, global = true)]
    token: Option<String>,
    /// Request timeout in seconds.
    #[arg(long, global = true)]
    timeout: Option<u64>,
    #[command(subcommand)]
    command: commands::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let cli = Cli::parse();
    let config = AppConfig::from_env().with_overrides(cli.api_url, cli.token, cli.timeout);
    tracing::debug!(api = %config.client.base_url, "Starting StudentHub CLI");

    let client = ApiClient::new(&config.client)?;
    commands::run(cli.command, &client, &config).await
}
