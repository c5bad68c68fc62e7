// ============================================================================
// Logging Setup
// ============================================================================

use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber for the formatter diagnostics.
///
/// Honours `RUST_LOG`, defaulting to `info`. Does nothing if a global
/// subscriber is already set.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
