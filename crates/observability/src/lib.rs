//! Process-wide logging setup for Acme binaries.

/// Tracing subscriber configuration (filters, formatting).
pub mod tracing;

/// Initialize tracing with the `info` default level.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    let _ = tracing::init(tracing::DEFAULT_FILTER);
}
