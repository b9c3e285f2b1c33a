//! Distributed tracing via OTLP span export.

use crate::config::TracingSettings;
use crate::{Error, Result};
use opentelemetry::KeyValue;
use opentelemetry::global;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::{Protocol, SpanExporter, WithExportConfig};
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::trace::{RandomIdGenerator, Sampler, SdkTracerProvider};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::Registry;

use super::otlp::{OtlpConfig, OtlpProtocol, endpoint_from};

const DEFAULT_TRACE_SAMPLE_RATIO: f64 = 1.0;

/// Tracing configuration.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Whether span export is enabled.
    pub enabled: bool,
    /// OTLP exporter configuration.
    pub otlp: OtlpConfig,
    /// Sample ratio for trace sampling (0.0 - 1.0).
    pub sample_ratio: f64,
    /// Service name for telemetry.
    pub service_name: String,
    /// Service version for telemetry.
    pub service_version: String,
    /// Additional resource attributes.
    pub resource_attributes: Vec<KeyValue>,
}

impl TracingConfig {
    /// Builds tracing configuration from config settings with env overrides.
    #[must_use]
    pub fn from_settings(settings: Option<&TracingSettings>) -> Self {
        Self::resolve(settings, |key| std::env::var(key).ok())
    }

    /// Same as [`from_settings`](Self::from_settings) with an explicit
    /// environment lookup.
    #[must_use]
    pub fn resolve(
        settings: Option<&TracingSettings>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let otlp = OtlpConfig::resolve(settings.and_then(|config| config.otlp.as_ref()), &lookup);

        let enabled = parse_bool(lookup("LEGALAID_TRACING_ENABLED"))
            .or_else(|| endpoint_from(&lookup).map(|_| true))
            .or_else(|| settings.and_then(|config| config.enabled))
            .unwrap_or(otlp.endpoint.is_some());

        let sample_ratio = lookup("LEGALAID_TRACE_SAMPLE_RATIO")
            .or_else(|| lookup("OTEL_TRACES_SAMPLER_ARG"))
            .and_then(|value| value.parse::<f64>().ok())
            .or_else(|| settings.and_then(|config| config.sample_ratio))
            .unwrap_or(DEFAULT_TRACE_SAMPLE_RATIO)
            .clamp(0.0, 1.0);

        let service_name = lookup("OTEL_SERVICE_NAME")
            .or_else(|| settings.and_then(|config| config.service_name.clone()))
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

        let resource_attributes = lookup("OTEL_RESOURCE_ATTRIBUTES")
            .map(|raw| raw.split(',').map(ToString::to_string).collect())
            .or_else(|| settings.and_then(|config| config.resource_attributes.clone()))
            .map(parse_resource_attributes)
            .unwrap_or_default();

        Self {
            enabled,
            otlp,
            sample_ratio,
            service_name,
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            resource_attributes,
        }
    }
}

/// Tracing initialization output.
pub struct TracingInit {
    /// `OpenTelemetry` layer for the tracing subscriber.
    pub layer: OpenTelemetryLayer<Registry, opentelemetry_sdk::trace::Tracer>,
    /// Tracer provider for shutdown flushing.
    pub provider: SdkTracerProvider,
    /// Tokio runtime for gRPC exporters when no runtime exists.
    pub runtime: Option<tokio::runtime::Runtime>,
}

/// Builds the tracing layer and provider, or `None` when export is disabled.
///
/// # Errors
///
/// Returns an error if tracing is enabled without an endpoint or the
/// exporter cannot be built.
pub fn build_tracing(config: &TracingConfig) -> Result<Option<TracingInit>> {
    if !config.enabled {
        return Ok(None);
    }

    let endpoint = config
        .otlp
        .endpoint
        .clone()
        .ok_or_else(|| Error::OperationFailed {
            operation: "tracing_init".to_string(),
            cause: "OTLP endpoint required when tracing is enabled".to_string(),
        })?;

    let runtime = match (config.otlp.protocol, tokio::runtime::Handle::try_current()) {
        (OtlpProtocol::Grpc, Err(_)) => Some(
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .map_err(|e| Error::OperationFailed {
                    operation: "otlp_runtime_init".to_string(),
                    cause: e.to_string(),
                })?,
        ),
        _ => None,
    };

    let _guard = runtime.as_ref().map(tokio::runtime::Runtime::enter);

    let exporter = match config.otlp.protocol {
        OtlpProtocol::Grpc => SpanExporter::builder()
            .with_tonic()
            .with_endpoint(&endpoint)
            .build(),
        OtlpProtocol::Http => SpanExporter::builder()
            .with_http()
            .with_protocol(Protocol::HttpBinary)
            .with_endpoint(&endpoint)
            .build(),
    }
    .map_err(|e| Error::OperationFailed {
        operation: "otlp_exporter_build".to_string(),
        cause: e.to_string(),
    })?;

    let mut attributes = vec![
        KeyValue::new("service.name", config.service_name.clone()),
        KeyValue::new("service.version", config.service_version.clone()),
    ];
    attributes.extend(config.resource_attributes.clone());

    let provider = SdkTracerProvider::builder()
        .with_sampler(build_sampler(config.sample_ratio))
        .with_id_generator(RandomIdGenerator::default())
        .with_resource(Resource::builder().with_attributes(attributes).build())
        .with_batch_exporter(exporter)
        .build();

    global::set_text_map_propagator(TraceContextPropagator::new());
    global::set_tracer_provider(provider.clone());

    let layer = OpenTelemetryLayer::new(provider.tracer(config.service_name.clone()));

    Ok(Some(TracingInit {
        layer,
        provider,
        runtime,
    }))
}

fn parse_resource_attributes(values: Vec<String>) -> Vec<KeyValue> {
    values
        .into_iter()
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            let key = key.trim();
            let value = value.trim();
            if key.is_empty() || value.is_empty() {
                return None;
            }
            Some(KeyValue::new(key.to_string(), value.to_string()))
        })
        .collect()
}

fn build_sampler(sample_ratio: f64) -> Sampler {
    if sample_ratio >= 1.0 {
        return Sampler::ParentBased(Box::new(Sampler::AlwaysOn));
    }
    Sampler::ParentBased(Box::new(Sampler::TraceIdRatioBased(sample_ratio)))
}

fn parse_bool(value: Option<String>) -> Option<bool> {
    value.map(|value| {
        let value = value.to_lowercase();
        value == "true" || value == "1" || value == "yes"
    })
}
