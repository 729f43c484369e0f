//! Tracing initialization and subscriber setup.
//!
//! Wires the `tracing` macros used throughout the crate to the OpenTelemetry
//! file exporter: EnvFilter → OpenTelemetry layer → OTLP JSON lines in the
//! user data directory.

use super::export;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// Traces land in `traces.json` under the user data directory (see
/// [`crate::infrastructure::paths::data_dir`]), rotating when the file grows
/// too large.
///
/// # Level resolution
///
/// 1. `RUST_LOG` environment variable, when set
/// 2. `config.trace_level`
/// 3. Default: `"info"`
///
/// # Behavior
///
/// - Creates the data directory if missing; silently returns if it cannot
///   (observability is optional, the app still runs)
/// - Idempotent: only the first initialization takes effect
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        "tastebook",
    )]);

    let trace_file = data_dir.join("traces.json");
    let provider = export::file_tracer_provider(trace_file, resource);

    let tracer = provider.tracer("tastebook");
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter).with(otel_layer);

    let _ = subscriber.try_init();
}
