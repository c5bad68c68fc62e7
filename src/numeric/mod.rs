// ============================================================================
// Numeric Module
// Decimal-safe arithmetic over IEEE-754 doubles
// ============================================================================
//
// This module provides:
// - NumericInput: number-or-string operand with a canonical text form
// - compute/Computation: chainable arithmetic without binary fraction noise
// - render: browser-compatible number text, 15-digit snapping, toFixed
// - NumericError: Error types shared by the formatters
//
// Design principles:
// - Every function is pure
// - IEEE semantics for invalid arithmetic (no error path in compute)
// - Parsing and formatting failures surface as NumericResult

mod compute;
mod errors;
mod operand;
pub mod render;

pub use compute::{compute, Computation, Operator};
pub use errors::{NumericError, NumericResult};
pub use operand::NumericInput;
