//! Configuration management for the MCP server.
//!
//! Configuration is assembled once at startup from defaults, an optional
//! `.env` file and environment variables, then handed explicitly to every
//! component that needs it.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{Level, info, warn};

/// Default backend base address.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Default backend request timeout, in seconds.
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Restaurant backend connection settings.
    pub backend: BackendConfig,

    /// Deployment environment name (development, staging, production).
    pub environment: String,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl LoggingConfig {
    /// Tracing level for the configured name, `None` when it is not recognized.
    pub fn tracing_level(&self) -> Option<Level> {
        match self.level.as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" | "critical" => Some(Level::ERROR),
            _ => None,
        }
    }
}

/// Connection settings for the restaurant backend.
#[derive(Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base address every request path is appended to.
    pub base_url: String,

    /// Request timeout in whole seconds.
    pub timeout_secs: u64,

    /// Bearer credential sent as `Authorization: Bearer <key>`.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            timeout_secs: DEFAULT_BACKEND_TIMEOUT_SECS,
            api_key: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "restaurant-backend-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            backend: BackendConfig::default(),
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a `.env` file (if present) and the environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests pass a map instead of touching the
    /// process environment.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Some(level) = var("LOG_LEVEL") {
            config.logging.level = level.to_lowercase();
        }

        if let Some(timestamps) = var("LOG_TIMESTAMPS") {
            config.logging.with_timestamps = parse_flag(&timestamps);
        }

        if let Some(environment) = var("ENVIRONMENT") {
            config.environment = environment;
        }

        config.transport = TransportConfig::from_vars(&var);

        if let Some(url) = var("BACKEND_URL") {
            config.backend.base_url = url;
        }

        if let Some(timeout) = var("BACKEND_TIMEOUT") {
            match timeout.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.backend.timeout_secs = secs,
                _ => warn!(
                    "Ignoring invalid BACKEND_TIMEOUT '{}', using {}s",
                    timeout, DEFAULT_BACKEND_TIMEOUT_SECS
                ),
            }
        }

        match var("API_KEY").filter(|key| !key.is_empty()) {
            Some(key) => {
                config.backend.api_key = Some(key);
                info!("Backend API key loaded from environment");
            }
            None => info!("No API_KEY set - backend requests are unauthenticated"),
        }

        config
    }
}

/// Interpret common truthy/falsy spellings; anything unrecognised is true.
pub(crate) fn parse_flag(value: &str) -> bool {
    !matches!(value.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off")
}
