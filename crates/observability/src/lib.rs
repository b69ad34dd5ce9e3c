//! Tracing and logging setup shared by processes embedding the registry.

/// Initialize process-wide observability using environment configuration.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

pub use tracing::{LogFormat, ObservabilityConfig, UnknownLogFormat, init_with};

/// Tracing configuration (filters, output format).
pub mod tracing;
