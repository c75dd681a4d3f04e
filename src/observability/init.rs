//! Tracing initialization and subscriber setup.
//!
//! Wires `tracing` macros to OpenTelemetry and on to the JSON-lines trace file.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "DirectApply";

/// Name of the active trace file inside the trace directory.
pub const TRACE_FILE_NAME: &str = "directapply-trace.jsonl";

/// Initializes the global tracing subscriber with file export.
///
/// The filter comes from `config.trace_level` (default `"info"`). Traces go to
/// [`TRACE_FILE_NAME`] inside `config.trace_dir`, or the data directory when
/// unset.
///
/// Observability is optional: if the directory cannot be created, nothing is
/// installed. Only the first successful call takes effect.
///
/// # Example
///
/// ```rust,no_run
/// use directapply::observability::init_tracing;
/// use directapply::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let trace_dir = config
        .trace_dir
        .clone()
        .unwrap_or_else(crate::infrastructure::data_dir);
    if std::fs::create_dir_all(&trace_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let provider = tracer::create_tracer_provider(trace_dir.join(TRACE_FILE_NAME), resource);
    let tracer = provider.tracer(SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
