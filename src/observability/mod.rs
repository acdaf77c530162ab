//! Process-level observability setup for binaries and tests embedding the
//! template.

pub mod tracing;

pub use self::tracing::{setup_tracing, TelemetryError};
