//! OpenTelemetry export, compiled in with the `telemetry` feature
//!
//! # Environment Variables
//!
//! - `OTEL_EXPORTER_OTLP_ENDPOINT`: OTLP endpoint (e.g., http://localhost:4317)
//! - `OTEL_SERVICE_NAME`: Service name (default: notify-service)

use anyhow::Result;
use tracing_subscriber::{Layer, Registry};

#[cfg(feature = "telemetry")]
const DEFAULT_SERVICE_NAME: &str = "notify-service";

/// Layer stacked directly on the registry, next to the fmt layer
pub type TelemetryLayer = Box<dyn Layer<Registry> + Send + Sync>;

pub fn otlp_endpoint() -> Option<String> {
    std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok()
}

/// Build the OTLP export layer for `endpoint`.
///
/// Runs before any subscriber exists, so it does not log; the caller reports
/// the outcome once logging is up. Without the `telemetry` feature this is
/// always `None`.
pub fn init_telemetry(endpoint: &str) -> Result<Option<TelemetryLayer>> {
    #[cfg(feature = "telemetry")]
    {
        init_telemetry_impl(endpoint).map(Some)
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = endpoint;
        Ok(None)
    }
}

/// Flush buffered spans; no-op without the feature
pub fn shutdown_telemetry() {
    #[cfg(feature = "telemetry")]
    opentelemetry::global::shutdown_tracer_provider();
}

#[cfg(feature = "telemetry")]
fn init_telemetry_impl(endpoint: &str) -> Result<TelemetryLayer> {
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry_otlp::WithExportConfig;

    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string());

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let provider = opentelemetry_sdk::trace::TracerProvider::builder()
        .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
        .build();
    let tracer = provider.tracer(service_name);
    opentelemetry::global::set_tracer_provider(provider);

    Ok(Box::new(tracing_opentelemetry::layer().with_tracer(tracer)))
}
