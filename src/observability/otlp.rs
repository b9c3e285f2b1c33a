//! OTLP exporter configuration.

use crate::config::OtlpSettings;

/// OTLP transport protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtlpProtocol {
    /// gRPC transport (4317 default).
    Grpc,
    /// HTTP/protobuf transport (4318 default).
    Http,
}

impl OtlpProtocol {
    /// Parses protocol from a config or environment value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "grpc" => Some(Self::Grpc),
            "http" | "http/protobuf" | "http_binary" | "http-binary" => Some(Self::Http),
            _ => None,
        }
    }
}

/// OTLP exporter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtlpConfig {
    /// Collector endpoint URL.
    pub endpoint: Option<String>,
    /// Transport protocol.
    pub protocol: OtlpProtocol,
}

impl OtlpConfig {
    /// Builds OTLP configuration from config settings with env overrides.
    #[must_use]
    pub fn from_settings(settings: Option<&OtlpSettings>) -> Self {
        Self::resolve(settings, |key| std::env::var(key).ok())
    }

    /// Same as [`from_settings`](Self::from_settings) with an explicit
    /// environment lookup.
    #[must_use]
    pub fn resolve(settings: Option<&OtlpSettings>, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let explicit_protocol = settings
            .and_then(|config| config.protocol.as_deref())
            .and_then(OtlpProtocol::parse);

        let mut endpoint = settings.and_then(|config| config.endpoint.clone());
        if let Some(overridden) = endpoint_from(&lookup) {
            endpoint = Some(overridden);
        }

        let protocol = lookup("LEGALAID_OTLP_PROTOCOL")
            .or_else(|| lookup("OTEL_EXPORTER_OTLP_PROTOCOL"))
            .and_then(|value| OtlpProtocol::parse(&value))
            .or(explicit_protocol)
            .unwrap_or_else(|| protocol_from_endpoint(endpoint.as_deref()));

        Self { endpoint, protocol }
    }
}

/// Endpoint from `LEGALAID_OTLP_ENDPOINT` or `OTEL_EXPORTER_OTLP_ENDPOINT`.
pub(super) fn endpoint_from(lookup: &impl Fn(&str) -> Option<String>) -> Option<String> {
    lookup("LEGALAID_OTLP_ENDPOINT")
        .or_else(|| lookup("OTEL_EXPORTER_OTLP_ENDPOINT"))
        .filter(|value| !value.trim().is_empty())
}

fn protocol_from_endpoint(endpoint: Option<&str>) -> OtlpProtocol {
    match endpoint {
        Some(endpoint) if endpoint.contains(":4317") => OtlpProtocol::Grpc,
        _ => OtlpProtocol::Http,
    }
}
