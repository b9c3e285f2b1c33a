//! Prometheus metrics.

use crate::config::MetricsSettings;
use crate::{Error, Result};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusRecorder};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::thread;

/// Default Prometheus exporter port.
pub const DEFAULT_METRICS_PORT: u16 = 9090;

/// Metrics configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsConfig {
    /// Whether metrics are enabled.
    pub enabled: bool,
    /// Address to bind the metrics exporter.
    pub listen_addr: SocketAddr,
}

impl MetricsConfig {
    /// Builds metrics configuration from config settings with env overrides.
    #[must_use]
    pub fn from_settings(settings: Option<&MetricsSettings>) -> Self {
        Self::resolve(settings, |key| std::env::var(key).ok())
    }

    /// Same as [`from_settings`](Self::from_settings) with an explicit
    /// environment lookup.
    #[must_use]
    pub fn resolve(
        settings: Option<&MetricsSettings>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let enabled = lookup("LEGALAID_METRICS_ENABLED")
            .map(|value| {
                let value = value.to_lowercase();
                value == "true" || value == "1" || value == "yes"
            })
            .or_else(|| settings.and_then(|config| config.enabled))
            .unwrap_or(false);
        let port = lookup("LEGALAID_METRICS_PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .or_else(|| settings.and_then(|config| config.port))
            .unwrap_or(DEFAULT_METRICS_PORT);

        Self {
            enabled,
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self::resolve(None, |_| None)
    }
}

/// Installs the Prometheus recorder, plus an HTTP listener when `expose` is set.
///
/// Returns whether a recorder was installed.
///
/// # Errors
///
/// Returns an error if a recorder is already installed or the exporter
/// cannot be built.
pub fn install_prometheus(config: &MetricsConfig, expose: bool) -> Result<bool> {
    if !config.enabled {
        return Ok(false);
    }

    let builder = PrometheusBuilder::new();
    if expose {
        tracing::info!(addr = %config.listen_addr, "Exposing Prometheus metrics");
        install_listener(builder.with_http_listener(config.listen_addr))?;
    } else {
        set_global_recorder(builder.build_recorder())?;
    }
    Ok(true)
}

fn install_listener(builder: PrometheusBuilder) -> Result<()> {
    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        return install_with_runtime(builder, &handle);
    }
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::OperationFailed {
            operation: "metrics_runtime_init".to_string(),
            cause: e.to_string(),
        })?;
    let handle = runtime.handle().clone();
    install_with_runtime(builder, &handle)?;
    thread::Builder::new()
        .name("metrics-exporter-prometheus-http".to_string())
        .spawn(move || runtime.block_on(std::future::pending::<()>()))
        .map_err(|e| Error::OperationFailed {
            operation: "metrics_runtime_thread".to_string(),
            cause: e.to_string(),
        })?;
    Ok(())
}

fn install_with_runtime(
    builder: PrometheusBuilder,
    runtime_handle: &tokio::runtime::Handle,
) -> Result<()> {
    let (recorder, exporter) = {
        let _guard = runtime_handle.enter();
        builder.build().map_err(|e| Error::OperationFailed {
            operation: "metrics_exporter_build".to_string(),
            cause: e.to_string(),
        })?
    };
    set_global_recorder(recorder)?;
    runtime_handle.spawn(exporter);
    Ok(())
}

fn set_global_recorder(recorder: PrometheusRecorder) -> Result<()> {
    metrics::set_global_recorder(recorder).map_err(|e| Error::OperationFailed {
        operation: "metrics_recorder_install".to_string(),
        cause: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MetricsConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.listen_addr.port(), 9090);
        assert!(!install_prometheus(&config, true).unwrap());
    }

    #[test]
    fn test_env_overrides_settings() {
        let settings = MetricsSettings {
            enabled: Some(false),
            port: Some(9100),
        };
        let config = MetricsConfig::resolve(Some(&settings), |key| match key {
            "LEGALAID_METRICS_ENABLED" => Some("yes".to_string()),
            _ => None,
        });
        assert!(config.enabled);
        assert_eq!(config.listen_addr.port(), 9100);
    }

    #[test]
    fn test_query_metrics_render() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            metrics::counter!("legalaid_queries_total", "outcome" => "matched").increment(1);
        });

        let rendered = handle.render();
        assert!(rendered.contains("legalaid_queries_total"));
        assert!(rendered.contains("outcome=\"matched\""));
    }
}
