//! Configuration module for the portal.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Log line format written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON document to load the record store from (embedded document when unset)
    pub fixtures_path: Option<PathBuf>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Log line format
    pub log_format: LogFormat,
    /// Reject axis selections outside the axis options
    pub strict_filters: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fixtures_path: None,
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
            strict_filters: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let fixtures_path = env::var("ENGG_FIXTURES_PATH")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let log_level = env::var("ENGG_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        let log_format = match env::var("ENGG_LOG_FORMAT") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                eprintln!("Ignoring ENGG_LOG_FORMAT: {}, using text", e);
                LogFormat::Text
            }),
            Err(_) => LogFormat::Text,
        };

        let strict_filters = env::var("ENGG_STRICT_FILTERS")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        Self {
            fixtures_path,
            log_level,
            log_format,
            strict_filters,
        }
    }
}
