//! Observability and telemetry.
//!
//! One [`init`] call per process wires a `tracing` subscriber (pretty or JSON,
//! stderr or file), optional OTLP span export and an optional Prometheus
//! exporter.

mod logging;
mod metrics;
mod otlp;
mod request_context;
mod tracing;

pub use logging::{LogFormat, LoggingConfig};
pub use metrics::{DEFAULT_METRICS_PORT, MetricsConfig};
pub use otlp::{OtlpConfig, OtlpProtocol};
pub use request_context::{
    REQUEST_ID_HEADER, RequestContext, RequestContextGuard, current_request_id,
    enter_request_context, scope_request_context,
};
pub use tracing::{TracingConfig, TracingInit, build_tracing};

use crate::config::ObservabilitySettings;
use crate::{Error, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Full observability configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Logging configuration.
    pub logging: LoggingConfig,
    /// Tracing configuration.
    pub tracing: TracingConfig,
    /// Metrics configuration.
    pub metrics: MetricsConfig,
    /// Whether to expose metrics via HTTP listener.
    pub metrics_expose: bool,
}

impl ObservabilityConfig {
    /// Resolves settings from the config file against the environment.
    #[must_use]
    pub fn from_settings(settings: &ObservabilitySettings, options: InitOptions) -> Self {
        Self {
            logging: LoggingConfig::from_settings(settings.logging.as_ref(), options.verbose),
            tracing: TracingConfig::from_settings(settings.tracing.as_ref()),
            metrics: MetricsConfig::from_settings(settings.metrics.as_ref()),
            metrics_expose: options.metrics_expose,
        }
    }
}

/// Options for initialization.
#[derive(Debug, Clone, Copy, Default)]
pub struct InitOptions {
    /// Whether verbose output was requested via CLI.
    pub verbose: bool,
    /// Whether to expose metrics via HTTP listener.
    pub metrics_expose: bool,
}

/// Handle for observability runtime components.
pub struct ObservabilityHandle {
    tracer_provider: Option<opentelemetry_sdk::trace::SdkTracerProvider>,
    tracing_runtime: Option<tokio::runtime::Runtime>,
}

static OBSERVABILITY_INIT: OnceLock<()> = OnceLock::new();

impl ObservabilityHandle {
    /// Flushes pending spans and shuts down the exporters.
    ///
    /// Safe to call from inside or outside a tokio runtime.
    pub fn shutdown(&mut self) {
        let tracer = self.tracer_provider.take();
        let tracing_runtime = self.tracing_runtime.take();

        let Some(tracer) = tracer else {
            Self::shutdown_runtime(tracing_runtime);
            return;
        };

        if tokio::runtime::Handle::try_current().is_ok() {
            // Blocking exporter shutdown must not run on an async worker directly
            tokio::task::block_in_place(|| {
                Self::flush_and_shutdown(&tracer);
                Self::shutdown_runtime(tracing_runtime);
            });
        } else if let Some(rt) = tracing_runtime {
            {
                let _guard = rt.enter();
                Self::flush_and_shutdown(&tracer);
            }
            Self::shutdown_runtime(Some(rt));
        } else {
            Self::flush_and_shutdown(&tracer);
        }
    }

    fn flush_and_shutdown(tracer: &opentelemetry_sdk::trace::SdkTracerProvider) {
        if let Err(e) = tracer.force_flush() {
            ::tracing::debug!("Span flush failed: {e}");
        }
        if let Err(e) = tracer.shutdown() {
            ::tracing::debug!("Tracer shutdown failed: {e}");
        }
    }

    fn shutdown_runtime(runtime: Option<tokio::runtime::Runtime>) {
        if let Some(rt) = runtime {
            rt.shutdown_timeout(std::time::Duration::from_secs(2));
        }
    }
}

impl Drop for ObservabilityHandle {
    fn drop(&mut self) {
        if self.tracer_provider.is_some() || self.tracing_runtime.is_some() {
            self.shutdown();
        }
    }
}

/// Initializes observability from config settings with env overrides.
///
/// # Errors
///
/// Returns an error if observability has already been initialized or if any
/// telemetry component fails to initialize.
pub fn init_from_config(
    settings: &ObservabilitySettings,
    options: InitOptions,
) -> Result<ObservabilityHandle> {
    init(ObservabilityConfig::from_settings(settings, options))
}

/// Initializes logging, tracing, and metrics for the process.
///
/// # Errors
///
/// Returns an error if observability has already been initialized or if any
/// telemetry component fails to initialize.
pub fn init(config: ObservabilityConfig) -> Result<ObservabilityHandle> {
    if OBSERVABILITY_INIT.get().is_some() {
        return Err(Error::OperationFailed {
            operation: "observability_init".to_string(),
            cause: "observability already initialized".to_string(),
        });
    }

    let filter = EnvFilter::try_new(&config.logging.filter).map_err(|e| {
        Error::InvalidInput(format!("invalid log filter '{}': {e}", config.logging.filter))
    })?;

    let metrics_installed = metrics::install_prometheus(&config.metrics, config.metrics_expose)?;

    let (otel_layer, tracer_provider, tracing_runtime) = match build_tracing(&config.tracing)? {
        Some(init) => (Some(init.layer), Some(init.provider), init.runtime),
        None => (None, None, None),
    };

    // Console output goes to stderr so command output on stdout stays clean
    match (&config.logging.file, config.logging.format) {
        (Some(log_file), LogFormat::Json) => {
            let writer = open_log_file(log_file)?;
            tracing_subscriber::registry()
                .with(otel_layer)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(writer)
                        .with_current_span(true)
                        .with_span_list(true)
                        .with_target(true),
                )
                .with(filter)
                .try_init()
                .map_err(init_error)?;
        },
        (Some(log_file), LogFormat::Pretty) => {
            let writer = open_log_file(log_file)?;
            tracing_subscriber::registry()
                .with(otel_layer)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false)
                        .with_target(true),
                )
                .with(filter)
                .try_init()
                .map_err(init_error)?;
        },
        (None, LogFormat::Json) => {
            tracing_subscriber::registry()
                .with(otel_layer)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(io::stderr)
                        .with_current_span(true)
                        .with_span_list(true)
                        .with_target(true),
                )
                .with(filter)
                .try_init()
                .map_err(init_error)?;
        },
        (None, LogFormat::Pretty) => {
            tracing_subscriber::registry()
                .with(otel_layer)
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_writer(io::stderr)
                        .with_target(true),
                )
                .with(filter)
                .try_init()
                .map_err(init_error)?;
        },
    }

    OBSERVABILITY_INIT
        .set(())
        .map_err(|()| Error::OperationFailed {
            operation: "observability_init".to_string(),
            cause: "failed to mark observability initialized".to_string(),
        })?;

    ::tracing::debug!(
        metrics = metrics_installed,
        otlp = tracer_provider.is_some(),
        "Observability initialized"
    );

    Ok(ObservabilityHandle {
        tracer_provider,
        tracing_runtime,
    })
}

/// Thread-safe file writer for logging.
#[derive(Clone)]
struct LogFileWriter {
    file: Arc<Mutex<File>>,
}

impl Write for LogFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::other(e.to_string()))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::other(e.to_string()))?;
        guard.flush()
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogFileWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Opens a log file for appending.
fn open_log_file(path: &Path) -> Result<LogFileWriter> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::OperationFailed {
            operation: "create_log_dir".to_string(),
            cause: e.to_string(),
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::OperationFailed {
            operation: "open_log_file".to_string(),
            cause: format!("{}: {}", path.display(), e),
        })?;

    Ok(LogFileWriter {
        file: Arc::new(Mutex::new(file)),
    })
}

#[allow(clippy::needless_pass_by_value)]
fn init_error(e: tracing_subscriber::util::TryInitError) -> Error {
    Error::OperationFailed {
        operation: "observability_init".to_string(),
        cause: e.to_string(),
    }
}
