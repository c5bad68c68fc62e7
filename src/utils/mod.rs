// ============================================================================
// Utilities Module
// Collection, identifier and logging helpers
// ============================================================================

mod id;
#[cfg(feature = "logging")]
mod logging;
mod unique;

pub use id::random_id;
#[cfg(feature = "logging")]
pub use logging::init_logging;
pub use unique::unique_by;
