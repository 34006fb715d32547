// ============================================================================
// Numeric Errors
// Error types for fixed-point construction and arithmetic
// ============================================================================

use thiserror::Error;

/// Errors that can occur while building or combining fixed-point values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NumericError {
    /// Integral magnitude reached the representable bound
    #[error("arithmetic overflow: price higher than the limit")]
    Overflow,
    /// Text has no decimal separator
    #[error("invalid price: missing decimal separator")]
    MissingSeparator,
    /// Integral part has too many (or zero) digits
    #[error("invalid price: integral part must have 1 to {max} digits, found {found}")]
    IntegralDigits { max: usize, found: usize },
    /// Fractional part does not have exactly the scale's digit count
    #[error("invalid price: fractional part must have exactly {expected} digits, found {found}")]
    FractionalDigits { expected: usize, found: usize },
    /// A negative component was supplied
    #[error("invalid price: negative values are not allowed")]
    Negative,
    /// Conversion would lose significant digits
    #[error("precision loss: conversion would lose significant digits")]
    PrecisionLoss,
    /// Input string or value is invalid
    #[error("invalid input: could not parse value")]
    InvalidInput,
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: price higher than the limit"
        );
        assert_eq!(
            NumericError::FractionalDigits {
                expected: 5,
                found: 2
            }
            .to_string(),
            "invalid price: fractional part must have exactly 5 digits, found 2"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::Negative);
    }
}
