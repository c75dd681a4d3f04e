//! OpenTelemetry-based observability with file-based trace export.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: One JSON object per finished span
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **Configurable Level**: `trace_level` feeds an `EnvFilter` (default `"info"`)
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `tracer`: Tracer provider and span exporter
//! - `file_writer`: Rotating file writer

mod file_writer;
mod init;
mod tracer;

pub use file_writer::FileWriter;
pub use init::{init_tracing, TRACE_FILE_NAME};
