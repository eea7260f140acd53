//! Tracing infrastructure.
//!
//! Structured, async-aware logging built on `tracing` and
//! `tracing-subscriber`:
//! - Multiple output formats (pretty, compact, JSON)
//! - Environment-based filtering (`RUST_LOG` wins over configuration)
//! - Idempotent initialization, safe to call from tests and binaries alike
//!
//! # Example
//! ```no_run
//! use toastbus::logging::{self, LogConfig, OutputFormat};
//! use tracing::{info, Level};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LogConfig::new(Level::DEBUG).with_format(OutputFormat::Compact);
//! logging::init(config)?;
//! info!("store starting");
//! # Ok(())
//! # }
//! ```

use crate::config::Settings;
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed format with colors (for development).
    Pretty,
    /// Compact single-line format without colors (for production).
    Compact,
    /// JSON format for structured logging (for log aggregation).
    Json,
}

/// Error returned when parsing an output format from text fails.
#[derive(Debug, Error)]
#[error("Unknown log format '{0}'. Must be one of: pretty, compact, json")]
pub struct ParseFormatError(String);

impl FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(OutputFormat::Pretty),
            "compact" => Ok(OutputFormat::Compact),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

/// Logging configuration options.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level used when `RUST_LOG` is not set.
    pub level: Level,
    /// Output format.
    pub format: OutputFormat,
    /// Whether to enable ANSI colors (only honored by the Pretty format).
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: OutputFormat::Pretty,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Create a logging config with the given level and default formatting.
    pub fn new(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Create a logging config from loaded settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, String> {
        let level = parse_log_level(&settings.application.log_level)?;
        Ok(Self::new(level))
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable ANSI colors.
    pub fn with_ansi(mut self, enabled: bool) -> Self {
        self.with_ansi = enabled;
        self
    }
}

/// Initialize the global tracing subscriber.
///
/// The `RUST_LOG` environment variable takes precedence over the configured
/// level, so deployments can re-filter without a config change.
///
/// This function is idempotent: if a subscriber is already installed it
/// returns `Ok(())`, which makes it safe to call from every test.
pub fn init(config: LogConfig) -> Result<(), String> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_to_filter_string(config.level)));

    let registry = tracing_subscriber::registry();
    let result = match config.format {
        OutputFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_ansi(config.with_ansi)
                    .with_filter(env_filter),
            )
            .try_init(),
        OutputFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_ansi(false)
                    .with_filter(env_filter),
            )
            .try_init(),
        OutputFormat::Json => registry
            .with(fmt::layer().json().with_filter(env_filter))
            .try_init(),
    };

    result.or_else(|e| {
        // A second init happens routinely when tests share a process
        if e.to_string()
            .contains("a global default trace dispatcher has already been set")
        {
            Ok(())
        } else {
            Err(format!("Failed to initialize tracing: {e}"))
        }
    })
}

/// Parse a log level string into a tracing [`Level`].
pub fn parse_log_level(level: &str) -> Result<Level, String> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(format!(
            "Invalid log level '{level}'. Must be one of: trace, debug, info, warn, error"
        )),
    }
}

/// Convert a [`Level`] to an env filter directive.
fn level_to_filter_string(level: Level) -> String {
    match level {
        Level::TRACE => "trace".to_string(),
        Level::DEBUG => "debug".to_string(),
        Level::INFO => "info".to_string(),
        Level::WARN => "warn".to_string(),
        Level::ERROR => "error".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_log_levels() {
        assert!(matches!(parse_log_level("trace"), Ok(Level::TRACE)));
        assert!(matches!(parse_log_level("debug"), Ok(Level::DEBUG)));
        assert!(matches!(parse_log_level("info"), Ok(Level::INFO)));
        assert!(matches!(parse_log_level("warn"), Ok(Level::WARN)));
        assert!(matches!(parse_log_level("error"), Ok(Level::ERROR)));

        // Case insensitive
        assert!(matches!(parse_log_level("INFO"), Ok(Level::INFO)));
        assert!(matches!(parse_log_level("Debug"), Ok(Level::DEBUG)));

        // Invalid
        assert!(parse_log_level("verbose").is_err());
    }

    #[test]
    fn parses_output_formats() {
        assert_eq!("pretty".parse::<OutputFormat>().unwrap(), OutputFormat::Pretty);
        assert_eq!("COMPACT".parse::<OutputFormat>().unwrap(), OutputFormat::Compact);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn config_from_settings_maps_level() {
        let mut settings = Settings::default();
        settings.application.log_level = "warn".to_string();

        let config = LogConfig::from_settings(&settings).unwrap();
        assert!(matches!(config.level, Level::WARN));
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = LogConfig::new(Level::ERROR)
            .with_format(OutputFormat::Json)
            .with_ansi(false);

        assert!(matches!(config.level, Level::ERROR));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.with_ansi);
    }
}
