//! Configuration management.
//!
//! Configuration is layered: built-in defaults, then a TOML file, then
//! `LEGALAID_*` environment variables.
//!
//! ```toml
//! rules_path = "rules.json"
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8000
//! cors_origins = ["http://localhost:5173"]
//!
//! [observability.logging]
//! format = "json"
//!
//! [observability.metrics]
//! enabled = true
//! port = 9090
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default rule file.
pub const DEFAULT_RULES_PATH: &str = "rules.json";

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8000;

/// Origins allowed by default (the local web UI dev server).
pub const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:5173", "http://127.0.0.1:5173"];

/// Main configuration for legalaid.
#[derive(Debug, Clone)]
pub struct LegalAidConfig {
    /// Path to the rule file.
    pub rules_path: PathBuf,
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Observability settings (resolved against env at init time).
    pub observability: ObservabilitySettings,
    /// File the configuration was loaded from, if any.
    pub source: Option<PathBuf>,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Allowed CORS origins.
    pub cors_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl ServerSettings {
    /// Returns `host:port`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Observability section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObservabilitySettings {
    /// Logging settings.
    pub logging: Option<LoggingSettings>,
    /// Tracing settings.
    pub tracing: Option<TracingSettings>,
    /// Metrics settings.
    pub metrics: Option<MetricsSettings>,
}

/// Logging settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSettings {
    /// Output format: "pretty" or "json".
    pub format: Option<String>,
    /// Filter directive (e.g. "info,legalaid=debug").
    pub filter: Option<String>,
    /// Optional file to append logs to.
    pub file: Option<String>,
}

/// Tracing settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TracingSettings {
    /// Whether span export is enabled (defaults to "endpoint configured").
    pub enabled: Option<bool>,
    /// Sample ratio (0.0 - 1.0).
    pub sample_ratio: Option<f64>,
    /// Service name reported to the collector.
    pub service_name: Option<String>,
    /// Extra resource attributes as `key=value` strings.
    pub resource_attributes: Option<Vec<String>>,
    /// OTLP exporter settings.
    pub otlp: Option<OtlpSettings>,
}

/// OTLP exporter settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtlpSettings {
    /// Collector endpoint URL.
    pub endpoint: Option<String>,
    /// "grpc" or "http".
    pub protocol: Option<String>,
}

/// Metrics settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricsSettings {
    /// Whether the Prometheus exporter is enabled.
    pub enabled: Option<bool>,
    /// Exporter listen port.
    pub port: Option<u16>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Rule file path.
    pub rules_path: Option<String>,
    /// Server section.
    pub server: Option<ConfigFileServer>,
    /// Observability section.
    pub observability: Option<ObservabilitySettings>,
}

/// Server section in config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileServer {
    /// Bind host.
    pub host: Option<String>,
    /// Bind port.
    pub port: Option<u16>,
    /// Allowed CORS origins.
    pub cors_origins: Option<Vec<String>>,
}

impl Default for LegalAidConfig {
    fn default() -> Self {
        Self {
            rules_path: PathBuf::from(DEFAULT_RULES_PATH),
            server: ServerSettings::default(),
            observability: ObservabilitySettings::default(),
            source: None,
        }
    }
}

impl LegalAidConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration for the process.
    ///
    /// Uses `explicit` if given, else `LEGALAID_CONFIG_PATH`, else the
    /// default locations; then applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> crate::Result<Self> {
        let env_path = std::env::var("LEGALAID_CONFIG_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let mut config = match explicit.map(Path::to_path_buf).or(env_path) {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::load_default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: format!("{}: {e}", path.display()),
            })?;

        let file: ConfigFile =
            toml::from_str(&contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: format!("{}: {e}", path.display()),
            })?;

        let mut config = Self::from_config_file(file);
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/legalaid/` on macOS)
    /// 2. XDG config dir (`~/.config/legalaid/` for Unix compatibility)
    ///
    /// Returns default configuration if no config file is found.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let candidates = [
            base_dirs.config_dir().join("legalaid").join("config.toml"),
            base_dirs
                .home_dir()
                .join(".config")
                .join("legalaid")
                .join("config.toml"),
        ];

        candidates
            .iter()
            .filter(|path| path.exists())
            .find_map(|path| Self::load_from_file(path).ok())
            .unwrap_or_default()
    }

    /// Converts a `ConfigFile` to `LegalAidConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(rules_path) = file.rules_path {
            config.rules_path = PathBuf::from(rules_path);
        }
        if let Some(server) = file.server {
            if let Some(host) = server.host {
                config.server.host = host;
            }
            if let Some(port) = server.port {
                config.server.port = port;
            }
            if let Some(origins) = server.cors_origins {
                config.server.cors_origins = origins;
            }
        }
        if let Some(observability) = file.observability {
            config.observability = observability;
        }

        config
    }

    /// Applies `LEGALAID_*` environment overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides from an arbitrary key lookup.
    ///
    /// Blank values and a `LEGALAID_PORT` that is not a valid port are
    /// skipped, leaving the current value in place.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(path) = get("LEGALAID_RULES_PATH") {
            self.rules_path = PathBuf::from(path);
        }
        if let Some(host) = get("LEGALAID_HOST") {
            self.server.host = host;
        }
        if let Some(port) = get("LEGALAID_PORT").and_then(|value| value.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some(origins) = get("LEGALAID_CORS_ORIGINS") {
            self.server.cors_origins = parse_origins(&origins);
        }
    }

    /// Sets the rule file path.
    #[must_use]
    pub fn with_rules_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.rules_path = path.into();
        self
    }

    /// Sets the bind host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.server.host = host.into();
        self
    }

    /// Sets the bind port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }
}

/// Splits a comma-separated origin list.
fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(ToString::to_string)
        .collect()
}
