//! Configuration module for Board API.

use serde::Deserialize;
use std::path::Path;

use crate::{BoardError, Result};

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL (`sqlite://...` or `postgres://...`).
    #[serde(default = "default_db_url")]
    pub url: String,
    /// Maximum number of pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of idle connections kept open.
    #[serde(default)]
    pub min_connections: u32,
    /// Seconds to wait for a free connection before failing.
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    /// Seconds an idle connection may linger before being closed.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
}

fn default_db_url() -> String {
    "sqlite://data/board.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout() -> u64 {
    30
}

fn default_idle_timeout() -> u64 {
    10
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_db_url(),
            max_connections: default_max_connections(),
            min_connections: 0,
            acquire_timeout_secs: default_acquire_timeout(),
            idle_timeout_secs: default_idle_timeout(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file. An empty path logs to the console only.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/board-api.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Web API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// CORS allowed origins. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Whether to serve Swagger UI and the OpenAPI document.
    #[serde(default = "default_swagger_enabled")]
    pub swagger_enabled: bool,
}

fn default_swagger_enabled() -> bool {
    true
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            cors_origins: vec![],
            swagger_enabled: default_swagger_enabled(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Web API configuration.
    #[serde(default)]
    pub web: WebConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(BoardError::Io)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| BoardError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `DATABASE_URL`: Override the database connection URL
    /// - `PORT`: Override the listening port
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("PORT").ok(),
        );
    }

    fn apply_overrides(&mut self, database_url: Option<String>, port: Option<String>) {
        if let Some(url) = database_url.filter(|u| !u.is_empty()) {
            self.database.url = url;
        }
        if let Some(port) = port {
            match port.parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) if port.is_empty() => {}
                Err(_) => tracing::warn!("Ignoring invalid PORT value: {}", port),
            }
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.database.url.trim().is_empty() {
            return Err(BoardError::Config(
                "database.url is empty. \
                 Set it in config.toml or via the DATABASE_URL environment variable."
                    .to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(BoardError::Config(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Socket address string the HTTP server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
