//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for programs that embed
//! the template.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the
//! `tracing` crate. The library itself only *emits* events (for example the
//! counter logs each increment at `debug` level); installing a subscriber is
//! the embedding process's decision, which is why this lives in its own
//! module rather than happening implicitly.
//!
//! ## Configuration
//!
//! - **Structured logging** with the `tracing` crate
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format** with the module-path prefix hidden
//!   (`with_target(false)`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo test
//!
//! # Show counter updates with structured fields
//! RUST_LOG=debug cargo test
//! ```
//!
//! With `RUST_LOG=debug`, incrementing a counter produces:
//!
//! ```text
//! DEBUG Incremented name="Bob" amount=4 value=5
//! ```

use thiserror::Error;

/// Errors that can occur while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber was already installed for this process.
    #[error("Tracing subscriber already installed: {0}")]
    AlreadyInitialized(String),
}

/// Installs the global tracing subscriber, configured from `RUST_LOG`.
///
/// Call this once per process, before exercising the library. A second call
/// returns [`TelemetryError::AlreadyInitialized`] and leaves the original
/// subscriber in place.
pub fn setup_tracing() -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - the event fields carry the context
        .compact()
        .try_init()
        .map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))
}
