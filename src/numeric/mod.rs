// ============================================================================
// Numeric Module
// Fixed-point arithmetic for exact money values
// ============================================================================
//
// This module provides:
// - FixedDecimal<D>: Fixed-point decimal with compile-time precision
// - NumericError: Error types for construction and arithmetic
// - Price: the 7.5 price format used by the order books
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics, no wrapping)
// - Single scaled i64 so comparisons are integer comparisons
// - Integral magnitude bounded below 10^8

mod errors;
mod fixed_decimal;

pub use errors::{NumericError, NumericResult};
pub use fixed_decimal::{FixedDecimal, Price};
