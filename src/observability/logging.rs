//! Structured logging configuration.

use crate::config::LoggingSettings;
use std::path::PathBuf;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parses a format name. Unknown names yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "pretty" | "text" | "human" => Some(Self::Pretty),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Resolved logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// `EnvFilter` directive string.
    pub filter: String,
    /// Optional file to append to instead of stderr.
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Builds logging configuration from config settings with env overrides.
    ///
    /// Filter precedence: `LEGALAID_LOG`, `RUST_LOG`, the config file, then
    /// `info` (`debug` when `verbose`).
    #[must_use]
    pub fn from_settings(settings: Option<&LoggingSettings>, verbose: bool) -> Self {
        Self::resolve(settings, verbose, |key| std::env::var(key).ok())
    }

    /// Same as [`from_settings`](Self::from_settings) with an explicit
    /// environment lookup.
    #[must_use]
    pub fn resolve(
        settings: Option<&LoggingSettings>,
        verbose: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let env = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let default_filter = if verbose { "debug" } else { "info" };
        let filter = env("LEGALAID_LOG")
            .or_else(|| env("RUST_LOG"))
            .or_else(|| settings.and_then(|s| s.filter.clone()))
            .unwrap_or_else(|| default_filter.to_string());

        let format = env("LEGALAID_LOG_FORMAT")
            .or_else(|| settings.and_then(|s| s.format.clone()))
            .and_then(|value| LogFormat::parse(&value))
            .unwrap_or_default();

        let file = env("LEGALAID_LOG_FILE")
            .or_else(|| settings.and_then(|s| s.file.clone()))
            .map(PathBuf::from);

        Self {
            format,
            filter,
            file,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            filter: "info".to_string(),
            file: None,
        }
    }
}
