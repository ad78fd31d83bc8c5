//! Logging setup for Board API.
//!
//! `RUST_LOG`, when set, replaces the configured directives entirely.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::{BoardError, Result};

/// Parse log level string to tracing Level.
fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Filter directives for a configured level.
///
/// Request traces from `tower_http` are only shown at debug and below, and
/// per-statement `sqlx` logs are capped at warn unless tracing everything.
fn default_directives(level: Level) -> String {
    let http = if level >= Level::DEBUG { "debug" } else { "warn" };
    let sqlx = if level == Level::TRACE { "trace" } else { "warn" };
    format!(
        "{},tower_http={},sqlx={}",
        level.as_str().to_lowercase(),
        http,
        sqlx
    )
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(parse_level(level))))
}

/// Initialize logging to stdout, plus `config.file` unless it is empty.
///
/// The log file is appended to, and its parent directory is created first.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if config.file.trim().is_empty() {
        return try_init_console(&config.level);
    }

    if let Some(parent) = Path::new(&config.file).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)?;
    let writer = std::io::stdout.and(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .with(build_filter(&config.level))
        .try_init()
        .map_err(|e| BoardError::Config(format!("failed to install logger: {e}")))
}

/// Initialize console-only logging.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_console_only(level: &str) {
    let _ = try_init_console(level);
}

fn try_init_console(level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true),
        )
        .with(build_filter(level))
        .try_init()
        .map_err(|e| BoardError::Config(format!("failed to install logger: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level("warning"), Level::WARN);
        assert_eq!(parse_level("error"), Level::ERROR);
        assert_eq!(parse_level("verbose"), Level::INFO);
        assert_eq!(parse_level(""), Level::INFO);
    }

    #[test]
    fn test_default_directives_info() {
        assert_eq!(
            default_directives(Level::INFO),
            "info,tower_http=warn,sqlx=warn"
        );
    }

    #[test]
    fn test_default_directives_debug_shows_requests() {
        assert_eq!(
            default_directives(Level::DEBUG),
            "debug,tower_http=debug,sqlx=warn"
        );
    }

    #[test]
    fn test_default_directives_trace_shows_queries() {
        assert_eq!(
            default_directives(Level::TRACE),
            "trace,tower_http=debug,sqlx=trace"
        );
    }

    #[test]
    fn test_default_directives_parse() {
        for level in [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE] {
            assert!(EnvFilter::try_new(default_directives(level)).is_ok());
        }
    }
}
