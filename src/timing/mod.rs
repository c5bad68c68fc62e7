// ============================================================================
// Timing Module
// Rate limiting for UI event callbacks
// ============================================================================

#[cfg(feature = "async")]
mod debounce;
mod throttle;

#[cfg(feature = "async")]
pub use debounce::Debouncer;
pub use throttle::Throttle;
