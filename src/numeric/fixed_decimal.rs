// ============================================================================
// Fixed-Point Decimal
// Exact scaled-integer decimal with compile-time precision and bounded range
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed-point decimal number with compile-time precision.
///
/// Internally stores `value × 10^DECIMALS` as an i64. The integral magnitude
/// is always strictly below [`FixedDecimal::MAX_INTEGRAL`] (10^8); every
/// constructor and arithmetic operation enforces the bound and reports
/// [`NumericError::Overflow`] instead of wrapping.
///
/// # Text format
/// Parsing accepts the canonical `<integral>.<fractional>` form: 1 to 7
/// integral digits, exactly `DECIMALS` fractional digits, no sign. Display
/// always renders the fractional part zero-padded to `DECIMALS` digits, so
/// `parse(format(x)) == x` for every parsed value.
///
/// # Example
/// ```
/// use simple_cross::numeric::Price;
///
/// let a: Price = "0.00001".parse().unwrap();
/// let b = a.checked_add(a).unwrap();
/// assert_eq!(b.to_string(), "0.00002");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "i64", into = "i64")
)]
#[repr(transparent)]
pub struct FixedDecimal<const DECIMALS: u8 = 5>(i64);

// ============================================================================
// Scale Constants
// ============================================================================

/// Compute 10^n at compile time
const fn pow10(n: u8) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

impl<const D: u8> FixedDecimal<D> {
    /// The scale factor (10^DECIMALS)
    pub const SCALE: i64 = pow10(D);

    /// Exclusive upper bound on the integral magnitude
    pub const MAX_INTEGRAL: i64 = 100_000_000;

    /// Maximum number of integral digits accepted by the parser
    pub const MAX_INTEGRAL_DIGITS: usize = 7;

    /// Exclusive bound on the raw (scaled) magnitude
    const RAW_BOUND: i64 = Self::MAX_INTEGRAL * Self::SCALE;

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One (1.0)
    pub const ONE: Self = Self(pow10(D));

    // ========================================================================
    // Construction
    // ========================================================================

    fn bounded(raw: i64) -> NumericResult<Self> {
        if raw.unsigned_abs() >= Self::RAW_BOUND as u64 {
            Err(NumericError::Overflow)
        } else {
            Ok(Self(raw))
        }
    }

    /// Create from the raw internal representation (already scaled).
    ///
    /// # Errors
    /// Returns `Overflow` if the magnitude is outside the representable range.
    #[inline]
    pub fn from_raw(raw: i64) -> NumericResult<Self> {
        Self::bounded(raw)
    }

    /// Create from a whole number.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is too large to represent.
    #[inline]
    pub fn from_integer(value: i64) -> NumericResult<Self> {
        value
            .checked_mul(Self::SCALE)
            .ok_or(NumericError::Overflow)
            .and_then(Self::bounded)
    }

    /// Create from integral and fractional parts.
    ///
    /// `fraction` is expressed in units of 10^-DECIMALS, so
    /// `from_parts(123, 45_000)` is `123.45000` for five decimals.
    ///
    /// # Errors
    /// - `Negative` if `integer` is negative
    /// - `InvalidInput` if `fraction >= SCALE`
    /// - `Overflow` if the integral part reaches the bound
    #[inline]
    pub fn from_parts(integer: i64, fraction: u64) -> NumericResult<Self> {
        if integer < 0 {
            return Err(NumericError::Negative);
        }
        if fraction >= Self::SCALE as u64 {
            return Err(NumericError::InvalidInput);
        }

        integer
            .checked_mul(Self::SCALE)
            .and_then(|scaled| scaled.checked_add(fraction as i64))
            .ok_or(NumericError::Overflow)
            .and_then(Self::bounded)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (value × 10^DECIMALS).
    #[inline]
    pub const fn raw_value(self) -> i64 {
        self.0
    }

    /// Get the integral part (truncated toward zero).
    #[inline]
    pub const fn integer_part(self) -> i64 {
        self.0 / Self::SCALE
    }

    /// Get the fractional part as a positive value.
    #[inline]
    pub const fn fractional_part(self) -> u64 {
        (self.0 % Self::SCALE).unsigned_abs()
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` if the integral magnitude of the result would
    /// reach 10^8.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_add(rhs.0)
            .ok_or(NumericError::Overflow)
            .and_then(Self::bounded)
    }

    /// Checked subtraction.
    ///
    /// Results below zero are representable; only the magnitude is bounded.
    ///
    /// # Errors
    /// Returns `Overflow` if the integral magnitude of the result would
    /// reach 10^8.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_sub(rhs.0)
            .ok_or(NumericError::Overflow)
            .and_then(Self::bounded)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const D: u8> fmt::Debug for FixedDecimal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedDecimal<{}>({}, raw={})", D, self, self.0)
    }
}

impl<const D: u8> fmt::Display for FixedDecimal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int_part = self.integer_part();
        let frac_part = self.fractional_part();

        if D == 0 {
            write!(f, "{}", int_part)
        } else if self.0 < 0 && int_part == 0 {
            // -0.xxxxx keeps its sign even though the integral part is zero
            write!(f, "-0.{:0>width$}", frac_part, width = D as usize)
        } else {
            write!(f, "{}.{:0>width$}", int_part, frac_part, width = D as usize)
        }
    }
}

// ============================================================================
// Raw Conversions (serde boundary)
// ============================================================================

impl<const D: u8> TryFrom<i64> for FixedDecimal<D> {
    type Error = NumericError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl<const D: u8> From<FixedDecimal<D>> for i64 {
    fn from(value: FixedDecimal<D>) -> Self {
        value.0
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl<const D: u8> FromStr for FixedDecimal<D> {
    type Err = NumericError;

    /// Parse the canonical `<integral>.<fractional>` form.
    ///
    /// # Examples
    /// - "100.00000" -> 100.00000
    /// - "0.00001" -> 0.00001
    /// - "100" -> MissingSeparator
    /// - "100.0" -> FractionalDigits
    /// - "100000000.00000" -> IntegralDigits
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        if s.starts_with('-') {
            return Err(NumericError::Negative);
        }

        let (int_str, frac_str) = s.split_once('.').ok_or(NumericError::MissingSeparator)?;

        if int_str.is_empty() || int_str.len() > Self::MAX_INTEGRAL_DIGITS {
            return Err(NumericError::IntegralDigits {
                max: Self::MAX_INTEGRAL_DIGITS,
                found: int_str.len(),
            });
        }
        if frac_str.len() != D as usize {
            return Err(NumericError::FractionalDigits {
                expected: D as usize,
                found: frac_str.len(),
            });
        }

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_str) || !all_digits(frac_str) {
            return Err(NumericError::InvalidInput);
        }

        let integer: i64 = int_str.parse().map_err(|_| NumericError::InvalidInput)?;
        let fraction: u64 = if frac_str.is_empty() {
            0
        } else {
            frac_str.parse().map_err(|_| NumericError::InvalidInput)?
        };

        Self::from_parts(integer, fraction)
    }
}

// ============================================================================
// Type Aliases for Common Use Cases
// ============================================================================

/// Price in 7.5 format: up to 7 integral digits, exactly 5 fractional digits
pub type Price = FixedDecimal<5>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn price(s: &str) -> Price {
        s.parse().unwrap()
    }

    #[test]
    fn test_constants() {
        assert_eq!(Price::SCALE, 100_000);
        assert_eq!(Price::ZERO.raw_value(), 0);
        assert_eq!(Price::ONE.raw_value(), 100_000);
    }

    #[test]
    fn test_from_parts() {
        let x = Price::from_parts(123, 45_000).unwrap();
        assert_eq!(x.integer_part(), 123);
        assert_eq!(x.fractional_part(), 45_000);
        assert_eq!(x.to_string(), "123.45000");

        assert_eq!(Price::from_parts(1, 100_000), Err(NumericError::InvalidInput));
        assert_eq!(Price::from_parts(-1, 0), Err(NumericError::Negative));
        assert_eq!(
            Price::from_parts(100_000_000, 0),
            Err(NumericError::Overflow)
        );
        assert!(Price::from_parts(99_999_999, 99_999).is_ok());
    }

    #[test]
    fn test_canonical_round_trip() {
        assert_eq!(price("100.00000").to_string(), "100.00000");
        assert_eq!(price("0.00001").to_string(), "0.00001");
        assert_eq!(price("9999999.99999").to_string(), "9999999.99999");
        assert_eq!(price("007.10000").to_string(), "7.10000");
    }

    #[test]
    fn test_smallest_increment_adds_exactly() {
        let tick = price("0.00001");
        assert_eq!(tick.checked_add(tick).unwrap(), price("0.00002"));
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        assert_eq!(
            "100000000.00000".parse::<Price>(),
            Err(NumericError::IntegralDigits { max: 7, found: 9 })
        );
        assert_eq!(
            "10000000.00000".parse::<Price>(),
            Err(NumericError::IntegralDigits { max: 7, found: 8 })
        );
        assert_eq!("100".parse::<Price>(), Err(NumericError::MissingSeparator));
        assert_eq!(
            "10'000'000.00".parse::<Price>(),
            Err(NumericError::IntegralDigits { max: 7, found: 10 })
        );
        assert_eq!(
            "0.1000001".parse::<Price>(),
            Err(NumericError::FractionalDigits {
                expected: 5,
                found: 7
            })
        );
        assert_eq!(
            "1.0".parse::<Price>(),
            Err(NumericError::FractionalDigits {
                expected: 5,
                found: 1
            })
        );
        assert_eq!("-1.00000".parse::<Price>(), Err(NumericError::Negative));
        assert_eq!("1.-0001".parse::<Price>(), Err(NumericError::InvalidInput));
        assert_eq!("1a.00000".parse::<Price>(), Err(NumericError::InvalidInput));
        assert_eq!("".parse::<Price>(), Err(NumericError::InvalidInput));
        assert_eq!(
            ".00000".parse::<Price>(),
            Err(NumericError::IntegralDigits { max: 7, found: 0 })
        );
    }

    #[test]
    fn test_checked_add() {
        let a = price("100.00000");
        let sum = a.checked_add(a).unwrap();
        assert_eq!(sum, price("200.00000"));

        let carry = price("0.99999").checked_add(price("0.00001")).unwrap();
        assert_eq!(carry, Price::ONE);

        let near_bound = Price::from_parts(99_999_999, 0).unwrap();
        assert_eq!(near_bound.checked_add(Price::ONE), Err(NumericError::Overflow));
    }

    #[test]
    fn test_checked_sub() {
        let ten = price("10.00000");
        let one = price("1.00000");
        assert_eq!(ten.checked_sub(one).unwrap(), price("9.00000"));

        let below_zero = one.checked_sub(ten).unwrap();
        assert!(below_zero.is_negative());
        assert_eq!(below_zero.to_string(), "-9.00000");

        let small = price("0.50000").checked_sub(one).unwrap();
        assert_eq!(small.to_string(), "-0.50000");

        let floor = Price::ZERO
            .checked_sub(Price::from_parts(99_999_999, 99_999).unwrap())
            .unwrap();
        assert_eq!(floor.checked_sub(price("0.00001")), Err(NumericError::Overflow));
    }

    #[test]
    fn test_ordering() {
        let a = price("100.00000");
        let b = price("99.99999");

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a.max(b), a);
        assert_eq!(a.min(b), b);
        assert_eq!(price("100.00000"), price("0100.00000"));
    }

    #[test]
    fn test_from_raw_enforces_bound() {
        assert_eq!(Price::from_raw(12_345).unwrap().to_string(), "0.12345");
        assert_eq!(
            Price::from_raw(Price::MAX_INTEGRAL * Price::SCALE),
            Err(NumericError::Overflow)
        );
        assert_eq!(Price::from_integer(100_000_000), Err(NumericError::Overflow));
        assert_eq!(Price::from_integer(i64::MAX), Err(NumericError::Overflow));
    }

    #[test]
    fn test_different_decimal_places() {
        type FD2 = FixedDecimal<2>;

        assert_eq!(FD2::SCALE, 100);
        let x: FD2 = "12.34".parse().unwrap();
        assert_eq!(x.to_string(), "12.34");
        assert!("12.345".parse::<FD2>().is_err());
    }

    #[test]
    fn test_raw_conversions() {
        assert_eq!(i64::from(price("1.50000")), 150_000);
        assert_eq!(Price::try_from(150_000), Ok(price("1.50000")));
        assert_eq!(
            Price::try_from(99_999_999_999_999),
            Err(NumericError::Overflow)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_enforces_bound() {
        let value = price("9999999.99999");
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "999999999999");
        assert_eq!(serde_json::from_str::<Price>(&json).unwrap(), value);

        assert!(serde_json::from_str::<Price>("99999999999999").is_err());
        assert!(serde_json::from_str::<Price>("-10000000000000").is_err());
    }

    quickcheck! {
        fn prop_display_parses_back(raw: u64) -> bool {
            // Parser accepts at most seven integral digits
            let raw = (raw % (10_000_000 * Price::SCALE as u64)) as i64;
            let value = Price::from_raw(raw).unwrap();
            value.to_string().parse::<Price>() == Ok(value)
        }
    }
}
