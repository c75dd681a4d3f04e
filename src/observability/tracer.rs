//! OpenTelemetry tracer provider with a JSON-lines file exporter.
//!
//! Every finished span becomes one compact JSON object on its own line:
//!
//! ```json
//! {"service":"DirectApply","name":"handle_event","traceId":"…","spanId":"…","startUnixNano":"…","durationUs":42,"attributes":{"event_type":"pointer_up"},"events":[]}
//! ```

use super::file_writer::FileWriter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Map, Value as JsonValue};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Span exporter writing one JSON line per span to a rotating file.
struct FileSpanExporter {
    writer: FileWriter,
    service: String,
    /// Prevents export after shutdown.
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    fn new(file_path: PathBuf, resource: &Resource) -> Self {
        let service = resource
            .get(opentelemetry::Key::from_static_str("service.name"))
            .map_or_else(|| "unknown".to_string(), |v| v.to_string());

        Self {
            writer: FileWriter::new(file_path),
            service,
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn format_span(&self, span: &SpanData) -> JsonValue {
        let duration = span
            .end_time
            .duration_since(span.start_time)
            .unwrap_or_default();

        let mut line = json!({
            "service": self.service,
            "name": span.name,
            "traceId": format!("{:032x}", span.span_context.trace_id()),
            "spanId": format!("{:016x}", span.span_context.span_id()),
            "startUnixNano": unix_nanos(span.start_time).to_string(),
            "durationUs": u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
            "attributes": format_attributes(&span.attributes),
            "events": span
                .events
                .iter()
                .map(|event| json!({
                    "name": event.name,
                    "timeUnixNano": unix_nanos(event.timestamp).to_string(),
                    "attributes": format_attributes(&event.attributes),
                }))
                .collect::<Vec<_>>(),
        });

        if span.parent_span_id != SpanId::INVALID {
            line["parentSpanId"] = json!(format!("{:016x}", span.parent_span_id));
        }
        line
    }
}

fn unix_nanos(time: SystemTime) -> u128 {
    time.duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos()
}

fn format_attributes(attributes: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = attributes
        .iter()
        .map(|kv| (kv.key.to_string(), format_value(&kv.value)))
        .collect();
    JsonValue::Object(map)
}

fn format_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!(b),
        Value::I64(i) => json!(i),
        Value::F64(f) => json!(f),
        Value::String(s) => json!(s.as_str()),
        other => json!(other.to_string()),
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        for span in &batch {
            let line = self.format_span(span).to_string();
            if let Err(e) = self.writer.write_line(&line) {
                return Box::pin(std::future::ready(Err(TraceError::from(e.to_string()))));
            }
        }

        Box::pin(std::future::ready(Ok(())))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, res: &Resource) {
        let _ = res;
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("service", &self.service)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Creates a tracer provider exporting every span to `file_path`.
///
/// Spans are exported synchronously as they end.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(file_path, &resource);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
