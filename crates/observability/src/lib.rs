//! Tracing/logging setup shared by binaries.

/// Initialize process-wide tracing with a default filter, used when
/// `RUST_LOG` is not set.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init_with_default(default_directive: &str) {
    tracing::init(default_directive);
}

/// Tracing configuration (filters, output format).
pub mod tracing;
