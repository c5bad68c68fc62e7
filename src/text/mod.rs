// ============================================================================
// Text Module
// Small string helpers for display fields
// ============================================================================

mod case;
mod mask;

pub use case::{turn_case, CaseMode};
pub use mask::hide_mobile;
