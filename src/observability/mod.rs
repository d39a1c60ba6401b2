//! Tracing with file-based OpenTelemetry export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider
//!     → FileSpanExporter → OTLP/JSON lines in a rotating file
//! ```
//!
//! The level comes from the `trace_level` plugin option (default `info`) and
//! accepts any `EnvFilter` directive, e.g. `recordseek::app=debug,info`.
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: Span exporter and tracer provider
//! - [`otlp`]: OTLP/JSON encoding
//! - [`rotation`]: Size-capped file with numbered backups

mod exporter;
mod init;
mod otlp;
mod rotation;

pub use init::{init_tracing, DEFAULT_TRACE_LEVEL};
