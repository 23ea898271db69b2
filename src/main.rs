//! Restaurant backend MCP server entry point.
//!
//! Initializes logging, loads configuration, builds the backend client and
//! starts the server on the configured transport.

use anyhow::{Context, Result};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use restaurant_mcp_server::core::{Config, McpServer, TransportService};
use restaurant_mcp_server::core::config::LoggingConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from .env and the environment
    let config = Config::from_env();

    init_logging(&config.logging);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!("Environment: {}", config.environment);
    info!(
        "Backend: {} (timeout {}s, {})",
        config.backend.base_url,
        config.backend.timeout_secs,
        if config.backend.api_key.is_some() {
            "authenticated"
        } else {
            "no API key"
        }
    );

    let server = McpServer::new(config.clone()).context("failed to initialize server")?;

    info!("Server initialized");

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr. `RUST_LOG`, when set, takes precedence over `LOG_LEVEL`.
fn init_logging(logging: &LoggingConfig) {
    let level = logging.tracing_level().unwrap_or(Level::INFO);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if logging.with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }

    if logging.tracing_level().is_none() {
        warn!("Unknown LOG_LEVEL '{}', using info", logging.level);
    }
}
