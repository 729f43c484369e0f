//! OpenTelemetry-based observability with file-based trace export.
//!
//! The terminal owns stdout, so spans are exported as OTLP JSON lines to a
//! rolling file under the user data directory instead of a console or a
//! network collector.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → FileSpanExporter → traces.json
//! ```
//!
//! Trace level comes from `RUST_LOG` when set, otherwise from the
//! `TASTEBOOK_TRACE_LEVEL` configuration (default `info`).
//!
//! # Modules
//!
//! - [`init`]: Tracing subscriber setup
//! - `export`: OTLP JSON span exporter and formatting
//! - `rolling`: Size-bounded rolling trace file

mod export;
mod init;
mod rolling;

pub use init::init_tracing;
