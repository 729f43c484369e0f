//! File-based OpenTelemetry span export.
//!
//! Implements a `SpanExporter` that serializes span batches to OTLP JSON and
//! appends them, one document per line, to a rolling file. This keeps traces
//! inspectable with standard OTLP tooling without a collector endpoint — the
//! app has no network surface and its stdout is the UI.

use super::rolling::RollingLogFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Value as JsonValue};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Instrumentation scope name stamped on exported spans.
const SCOPE_NAME: &str = "tastebook";

/// Span exporter writing OTLP JSON lines to a rolling file.
struct FileSpanExporter {
    writer: RollingLogFile,
    resource: Resource,
    is_shutdown: AtomicBool,
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        let document = format_batch(&self.resource, &batch).to_string();
        match self.writer.write_line(&document) {
            Ok(()) => Box::pin(std::future::ready(Ok(()))),
            Err(e) => Box::pin(std::future::ready(Err(TraceError::from(e.to_string())))),
        }
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, res: &Resource) {
        self.resource = res.clone();
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .finish()
    }
}

/// Creates a tracer provider exporting spans to the given file.
///
/// Uses the simple (immediate, non-batched) export strategy: span volume is
/// tied to user keystrokes, so batching buys nothing and immediate writes
/// survive abrupt exits.
pub fn file_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter {
        writer: RollingLogFile::new(file_path),
        resource: resource.clone(),
        is_shutdown: AtomicBool::new(false),
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

/// Formats one span batch as a complete OTLP JSON document.
fn format_batch(resource: &Resource, batch: &[SpanData]) -> JsonValue {
    let resource_attrs: Vec<JsonValue> = resource
        .iter()
        .map(|(key, value)| {
            json!({
                "key": key.to_string(),
                "value": format_value(value),
            })
        })
        .collect();

    let spans: Vec<JsonValue> = batch.iter().map(format_span).collect();

    json!({
        "resourceSpans": [{
            "resource": { "attributes": resource_attrs },
            "scopeSpans": [{
                "scope": { "name": SCOPE_NAME },
                "spans": spans,
            }]
        }]
    })
}

/// Formats a single span: ids as hex, times as epoch nanoseconds, status as
/// the OTLP integer code.
fn format_span(span: &SpanData) -> JsonValue {
    let parent = if span.parent_span_id == opentelemetry::trace::SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };

    let (status_code, status_message) = match &span.status {
        opentelemetry::trace::Status::Unset => (0, String::new()),
        opentelemetry::trace::Status::Ok => (1, String::new()),
        opentelemetry::trace::Status::Error { description } => (2, description.to_string()),
    };

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "kind": span_kind_code(&span.span_kind),
        "startTimeUnixNano": epoch_nanos(span.start_time),
        "endTimeUnixNano": epoch_nanos(span.end_time),
        "attributes": format_attributes(&span.attributes),
        "events": span.events.iter().map(|event| json!({
            "timeUnixNano": epoch_nanos(event.timestamp),
            "name": event.name,
            "attributes": format_attributes(&event.attributes),
        })).collect::<Vec<_>>(),
        "status": { "code": status_code, "message": status_message },
    })
}

/// Formats key-value attributes as the OTLP array form.
fn format_attributes(attributes: &[opentelemetry::KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| {
            json!({
                "key": kv.key.to_string(),
                "value": format_value(&kv.value),
            })
        })
        .collect()
}

/// Maps an attribute value to its OTLP JSON representation.
///
/// Integers are serialized as strings per the OTLP JSON encoding; arrays fall
/// back to their debug rendering.
fn format_value(value: &opentelemetry::Value) -> JsonValue {
    use opentelemetry::Value;

    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.to_string() }),
        Value::Array(_) => json!({ "stringValue": format!("{value:?}") }),
    }
}

/// OTLP span kind code (Internal=1 ... Consumer=5).
const fn span_kind_code(kind: &opentelemetry::trace::SpanKind) -> u8 {
    match kind {
        opentelemetry::trace::SpanKind::Internal => 1,
        opentelemetry::trace::SpanKind::Server => 2,
        opentelemetry::trace::SpanKind::Client => 3,
        opentelemetry::trace::SpanKind::Producer => 4,
        opentelemetry::trace::SpanKind::Consumer => 5,
    }
}

/// Nanoseconds since the Unix epoch, as the string OTLP expects.
fn epoch_nanos(time: std::time::SystemTime) -> String {
    time.duration_since(std::time::SystemTime::UNIX_EPOCH)
        .unwrap_or(std::time::Duration::from_secs(0))
        .as_nanos()
        .to_string()
}
