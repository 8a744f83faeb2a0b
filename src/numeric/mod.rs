// ============================================================================
// Numeric Module
// Fixed-point arithmetic for the on-chain (18-decimal) representation
// ============================================================================
//
// This module provides:
// - FixedDecimal<D>: Fixed-point decimal with compile-time precision
// - Wad: the 18-decimal alias, with exp/ln/sqrt
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - No floating-point operations inside the arithmetic
// - Checked arithmetic returns Result; saturating arithmetic never fails
// - Round half away from zero on every rescale
// - Compile-time configurable precision via const generics

mod errors;
mod fixed_decimal;
mod transcendental;

pub use errors::{NumericError, NumericResult};
pub use fixed_decimal::{FixedDecimal, Wad};
pub(crate) use fixed_decimal::scale_f64;
