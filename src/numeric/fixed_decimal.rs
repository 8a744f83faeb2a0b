// ============================================================================
// Fixed-Point Decimal
// Signed fixed-point arithmetic with compile-time precision
// ============================================================================

use super::errors::{NumericError, NumericResult};
use primitive_types::U256;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Fixed-point decimal number with compile-time precision.
///
/// Internally stores `value × 10^DECIMALS` as an i128.
///
/// # Type Parameter
/// - `DECIMALS`: Number of decimal places (0-36). Default is 18.
///
/// # Value Range
/// With DECIMALS=18 (default):
/// - Minimum: -170,141,183,460,469,231,731.687303715884105728
/// - Maximum: +170,141,183,460,469,231,731.687303715884105727
/// - Precision: 0.000000000000000001 (one wei)
///
/// Multiplication and division go through a 256-bit intermediate and round
/// half away from zero, so `a * b` never loses precision before the final
/// rescale.
///
/// # Example
/// ```
/// use gaussian_invariant::numeric::Wad;
///
/// let strike = Wad::from_integer(2).unwrap();
/// let reserve: Wad = "0.25".parse().unwrap();
/// let quote = strike.checked_mul(reserve).unwrap();
/// assert_eq!(quote.to_string(), "0.500000000000000000");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct FixedDecimal<const DECIMALS: u8 = 18>(i128);

// ============================================================================
// Scale Constants
// ============================================================================

/// Compute 10^n at compile time
const fn pow10(n: u8) -> i128 {
    let mut result: i128 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// `round(a * b / d)` with a 256-bit product, rounding half away from zero.
fn mul_div_round(a: i128, b: i128, d: i128) -> NumericResult<i128> {
    if d == 0 {
        return Err(NumericError::DivisionByZero);
    }

    let negative = (a < 0) ^ (b < 0) ^ (d < 0);
    let product = U256::from(a.unsigned_abs()) * U256::from(b.unsigned_abs());
    let divisor = U256::from(d.unsigned_abs());
    narrow(negative, (product + divisor / 2) / divisor)
}

/// Signed i128 from a sign and a 256-bit magnitude.
fn narrow(negative: bool, magnitude: U256) -> NumericResult<i128> {
    // |i128::MIN| is one larger than i128::MAX
    let limit = if negative {
        U256::from(1u128 << 127)
    } else {
        U256::from(i128::MAX as u128)
    };
    if magnitude > limit {
        return Err(if negative {
            NumericError::Underflow
        } else {
            NumericError::Overflow
        });
    }

    let magnitude = magnitude.low_u128() as i128;
    Ok(if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    })
}

/// Largest power of ten below 2^256
const MAX_U256_EXP10: i32 = 77;

/// `|value| × 10^decimals`, rounded half away from zero, with the sign.
///
/// Works on the shortest decimal form of `value` (the digits `{:e}`
/// prints), so a literal such as `0.27886807` scales to exactly
/// `278868070000000000` rather than to the product of its binary
/// approximation.
///
/// # Errors
/// `NonFinite` for NaN or infinities, `Overflow`/`Underflow` when the
/// magnitude reaches 2^256.
pub(crate) fn scale_f64(value: f64, decimals: u8) -> NumericResult<(bool, U256)> {
    use std::fmt::Write;

    if !value.is_finite() {
        return Err(NumericError::NonFinite);
    }
    let negative = value.is_sign_negative();
    let out_of_range = if negative {
        NumericError::Underflow
    } else {
        NumericError::Overflow
    };

    let mut text = arrayvec::ArrayString::<32>::new();
    write!(text, "{:e}", value.abs()).map_err(|_| NumericError::InvalidInput)?;
    let (mantissa, exponent) = text.split_once('e').ok_or(NumericError::InvalidInput)?;
    let exponent: i32 = exponent.parse().map_err(|_| NumericError::InvalidInput)?;

    let (mut digits, mut count) = (0u64, 0i32);
    for byte in mantissa.bytes().filter(|&b| b != b'.') {
        if !byte.is_ascii_digit() {
            return Err(NumericError::InvalidInput);
        }
        digits = digits * 10 + u64::from(byte - b'0');
        count += 1;
    }
    if digits == 0 {
        return Ok((negative, U256::zero()));
    }

    // value = digits × 10^shift after scaling
    let shift = exponent - (count - 1) + i32::from(decimals);
    if shift >= 0 {
        if shift > MAX_U256_EXP10 {
            return Err(out_of_range);
        }
        let magnitude = U256::from(digits)
            .checked_mul(U256::exp10(shift as usize))
            .ok_or(out_of_range)?;
        return Ok((negative, magnitude));
    }

    // at most 17 significant digits, so anything past 10^38 rounds to zero
    let magnitude = match 10u128.checked_pow(shift.unsigned_abs()) {
        Some(divisor) => (u128::from(digits) + divisor / 2) / divisor,
        None => 0,
    };
    Ok((negative, U256::from(magnitude)))
}

impl<const D: u8> FixedDecimal<D> {
    /// Decimal places
    pub const DECIMALS: u8 = D;

    /// The scale factor (10^DECIMALS)
    pub const SCALE: i128 = pow10(D);

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One (1.0)
    pub const ONE: Self = Self(pow10(D));

    /// Two (2.0), the upper end of the erfc range
    pub const TWO: Self = Self(2 * pow10(D));

    /// Maximum representable value
    pub const MAX: Self = Self(i128::MAX);

    /// Minimum representable value
    pub const MIN: Self = Self(i128::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation (already scaled).
    #[inline]
    pub const fn from_raw(raw: i128) -> Self {
        Self(raw)
    }

    /// Create from an integer value.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is too large to represent.
    #[inline]
    pub fn from_integer(value: i64) -> NumericResult<Self> {
        (value as i128)
            .checked_mul(Self::SCALE)
            .map(Self)
            .ok_or(if value < 0 {
                NumericError::Underflow
            } else {
                NumericError::Overflow
            })
    }

    /// Create from integer and fractional parts.
    ///
    /// # Arguments
    /// - `integer`: The integer part (can be negative)
    /// - `fraction`: The fractional part (must be < SCALE, always positive)
    ///
    /// # Example
    /// ```
    /// use gaussian_invariant::numeric::FixedDecimal;
    ///
    /// // 123.456 with 4 decimals
    /// let x = FixedDecimal::<4>::from_parts(123, 4_560).unwrap();
    /// assert_eq!(x.to_string(), "123.4560");
    /// ```
    #[inline]
    pub fn from_parts(integer: i128, fraction: u128) -> NumericResult<Self> {
        if fraction >= Self::SCALE as u128 {
            return Err(NumericError::InvalidInput);
        }

        let int_scaled = integer
            .checked_mul(Self::SCALE)
            .ok_or(NumericError::Overflow)?;

        let frac_signed = if integer < 0 {
            -(fraction as i128)
        } else {
            fraction as i128
        };

        int_scaled
            .checked_add(frac_signed)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Scale a float to fixed point, rounding half away from zero.
    ///
    /// The float is read as its shortest decimal form, so `from_f64(0.1)`
    /// equals `"0.1".parse()` exactly.
    ///
    /// # Errors
    /// - `NonFinite` for NaN or infinities
    /// - `Overflow` / `Underflow` if the scaled value leaves the i128 range
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        let (negative, magnitude) = scale_f64(value, D)?;
        narrow(negative, magnitude).map(Self)
    }

    /// Scale a float to fixed point, clamping to `MIN`/`MAX`.
    ///
    /// NaN maps to zero.
    pub fn saturating_from_f64(value: f64) -> Self {
        match Self::from_f64(value) {
            Ok(v) => v,
            Err(err) if err.is_out_of_range() => Self::clamp_to(err),
            Err(_) if value == f64::INFINITY => Self::MAX,
            Err(_) if value == f64::NEG_INFINITY => Self::MIN,
            Err(_) => Self::ZERO,
        }
    }

    /// Convert to the nearest float.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (value × 10^DECIMALS).
    #[inline]
    pub const fn raw_value(self) -> i128 {
        self.0
    }

    /// Get the integer part (truncated toward zero).
    #[inline]
    pub const fn integer_part(self) -> i128 {
        self.0 / Self::SCALE
    }

    /// Get the fractional part as a positive value.
    #[inline]
    pub const fn fractional_part(self) -> u128 {
        (self.0 % Self::SCALE).unsigned_abs()
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if value is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Get absolute value.
    #[inline]
    pub fn abs(self) -> NumericResult<Self> {
        self.0.checked_abs().map(Self).ok_or(NumericError::Overflow)
    }

    // ========================================================================
    // Checked Arithmetic
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_add(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 > 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_sub(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 < 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked multiplication, rounded half away from zero.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        mul_div_round(self.0, rhs.0, Self::SCALE).map(Self)
    }

    /// Checked division, rounded half away from zero.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for a zero divisor, `Overflow` or `Underflow`
    /// if the quotient is out of range.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        mul_div_round(self.0, Self::SCALE, rhs.0).map(Self)
    }

    /// Multiply by an integer (no scaling needed).
    #[inline]
    pub fn checked_mul_int(self, rhs: i128) -> NumericResult<Self> {
        self.0
            .checked_mul(rhs)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    // ========================================================================
    // Saturating Arithmetic
    // ========================================================================

    /// The bound a failed operation saturates to.
    #[inline]
    fn clamp_to(err: NumericError) -> Self {
        match err {
            NumericError::Underflow => Self::MIN,
            _ => Self::MAX,
        }
    }

    /// Absolute value, `MIN` saturating to `MAX`.
    #[inline]
    pub const fn saturating_abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Addition clamped to `MIN..=MAX`.
    #[inline]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Subtraction clamped to `MIN..=MAX`.
    #[inline]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Multiplication clamped to `MIN..=MAX`.
    #[inline]
    pub fn saturating_mul(self, rhs: Self) -> Self {
        self.checked_mul(rhs).unwrap_or_else(Self::clamp_to)
    }

    /// Division clamped to `MIN..=MAX`.
    ///
    /// Division by zero saturates toward the sign of the dividend (`0 / 0`
    /// is zero).
    #[inline]
    pub fn saturating_div(self, rhs: Self) -> Self {
        if rhs.0 == 0 {
            return match self.0 {
                0 => Self::ZERO,
                v if v > 0 => Self::MAX,
                _ => Self::MIN,
            };
        }
        self.checked_div(rhs).unwrap_or_else(Self::clamp_to)
    }
}

// ============================================================================
// Operators
// ============================================================================

// Operators saturate; use checked_* where overflow must be observed.
impl<const D: u8> Neg for FixedDecimal<D> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(self.0.saturating_neg())
    }
}

impl<const D: u8> Add for FixedDecimal<D> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl<const D: u8> Sub for FixedDecimal<D> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.saturating_sub(rhs)
    }
}

impl<const D: u8> Mul for FixedDecimal<D> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.saturating_mul(rhs)
    }
}

impl<const D: u8> Div for FixedDecimal<D> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.saturating_div(rhs)
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
            // Handle -0.xxx case
            write!(f, "-0.{:0>width$}", frac_part, width = D as usize)
        } else {
            write!(f, "{}.{:0>width$}", int_part, frac_part, width = D as usize)
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl<const D: u8> std::str::FromStr for FixedDecimal<D> {
    type Err = NumericError;

    /// Parse from a decimal string, exactly.
    ///
    /// # Examples
    /// - "123" -> 123.000000000000000000
    /// - "0.308537538726" -> 0.308537538726000000
    /// - "-0.001" -> -0.001000000000000000
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else {
            (false, s)
        };

        let (int_str, frac_str) = if let Some(pos) = s.find('.') {
            (&s[..pos], Some(&s[pos + 1..]))
        } else {
            (s, None)
        };

        let int_val: i128 = if int_str.is_empty() {
            0
        } else {
            int_str.parse().map_err(|_| NumericError::InvalidInput)?
        };

        let frac_val: u128 = if let Some(frac) = frac_str {
            if frac.is_empty() {
                0
            } else if frac.len() > D as usize {
                return Err(NumericError::PrecisionLoss);
            } else {
                // Pad with zeros to reach DECIMALS length
                let padded = format!("{:0<width$}", frac, width = D as usize);
                padded.parse().map_err(|_| NumericError::InvalidInput)?
            }
        } else {
            0
        };

        let mut result = Self::from_parts(int_val, frac_val)?;
        if is_negative {
            result = -result;
        }

        Ok(result)
    }
}

// ============================================================================
// Type Aliases
// ============================================================================

/// 18-decimal fixed point, the on-chain token-accounting scale
pub type Wad = FixedDecimal<18>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    type FD18 = FixedDecimal<18>;

    #[test]
    fn test_constants() {
        assert_eq!(FD18::SCALE, 1_000_000_000_000_000_000);
        assert_eq!(FD18::ZERO.raw_value(), 0);
        assert_eq!(FD18::ONE.raw_value(), 1_000_000_000_000_000_000);
        assert_eq!(FD18::TWO.raw_value(), 2_000_000_000_000_000_000);
    }

    #[test]
    fn test_from_integer() {
        let x = FD18::from_integer(100).unwrap();
        assert_eq!(x.raw_value(), 100_000_000_000_000_000_000);
        assert_eq!(x.integer_part(), 100);
        assert_eq!(x.fractional_part(), 0);

        let year = FD18::from_integer(31_556_952).unwrap();
        assert_eq!(year.integer_part(), 31_556_952);
    }

    #[test]
    fn test_from_parts() {
        let x = FD18::from_parts(123, 456_000_000_000_000_000).unwrap();
        assert_eq!(x.integer_part(), 123);
        assert_eq!(x.to_string(), "123.456000000000000000");

        let y = FD18::from_parts(-5, 500_000_000_000_000_000).unwrap();
        assert_eq!(y.integer_part(), -5);
        assert!(y.is_negative());
    }

    #[test]
    fn test_from_parts_invalid() {
        let result = FD18::from_parts(1, 1_000_000_000_000_000_000);
        assert_eq!(result, Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_from_f64_rounds_half_away_from_zero() {
        assert_eq!(FD18::from_f64(0.5).unwrap().raw_value(), 500_000_000_000_000_000);
        assert_eq!(FD18::from_f64(-1.0).unwrap(), -FD18::ONE);

        type FD1 = FixedDecimal<1>;
        assert_eq!(FD1::from_f64(0.25).unwrap().raw_value(), 3);
        assert_eq!(FD1::from_f64(-0.25).unwrap().raw_value(), -3);
    }

    #[test]
    fn test_from_f64_invalid() {
        assert_eq!(FD18::from_f64(f64::NAN), Err(NumericError::NonFinite));
        assert_eq!(FD18::from_f64(f64::INFINITY), Err(NumericError::NonFinite));
        assert_eq!(FD18::from_f64(1e21), Err(NumericError::Overflow));
        assert_eq!(FD18::from_f64(-1e21), Err(NumericError::Underflow));
    }

    #[test]
    fn test_from_f64_matches_decimal_text() {
        for text in ["0.27886807", "0.1", "-1.26551223", "1.00002368", "0.17087277", "1e-18"] {
            let literal: f64 = text.parse().unwrap();
            assert_eq!(FD18::from_f64(literal).unwrap(), text.parse::<FD18>().unwrap(), "{text}");
        }
        assert_eq!(FD18::from_f64(0.27886807).unwrap().raw_value(), 278_868_070_000_000_000);
        assert_eq!(FD18::from_f64(-0.0).unwrap(), FD18::ZERO);
        assert_eq!(FD18::from_f64(4e-19).unwrap(), FD18::ZERO);
        assert_eq!(FD18::from_f64(5e-19).unwrap().raw_value(), 1);
        assert_eq!(FD18::from_f64(f64::MIN_POSITIVE).unwrap(), FD18::ZERO);
        assert_eq!(
            FD18::from_f64(170_141_183_460.5).unwrap().raw_value(),
            170_141_183_460_500_000_000_000_000_000
        );
    }

    #[test]
    fn test_scale_f64_reaches_256_bits() {
        let (negative, magnitude) = scale_f64(-3.4e38, 18).unwrap();
        assert!(negative);
        assert_eq!(magnitude, U256::from(34u8) * U256::exp10(55));
        assert_eq!(scale_f64(1e60, 18), Err(NumericError::Overflow));
        assert_eq!(scale_f64(-1e60, 18), Err(NumericError::Underflow));
        assert_eq!(scale_f64(f64::NAN, 18), Err(NumericError::NonFinite));
    }

    #[test]
    fn test_saturating_from_f64() {
        assert_eq!(FD18::saturating_from_f64(1e30), FD18::MAX);
        assert_eq!(FD18::saturating_from_f64(f64::NEG_INFINITY), FD18::MIN);
        assert_eq!(FD18::saturating_from_f64(f64::NAN), FD18::ZERO);
    }

    #[test]
    fn test_to_f64() {
        let x: FD18 = "0.308537538726".parse().unwrap();
        assert!((x.to_f64() - 0.308537538726).abs() < 1e-15);
    }

    #[test]
    fn test_checked_add() {
        let a = FD18::from_integer(100).unwrap();
        let b = FD18::from_integer(50).unwrap();
        assert_eq!(a.checked_add(b).unwrap().integer_part(), 150);

        let result = FD18::MAX.checked_add(FD18::ONE);
        assert_eq!(result, Err(NumericError::Overflow));
    }

    #[test]
    fn test_checked_sub() {
        let a = FD18::from_integer(100).unwrap();
        let b = FD18::from_integer(30).unwrap();
        assert_eq!(a.checked_sub(b).unwrap().integer_part(), 70);
        assert_eq!(b.checked_sub(a).unwrap().integer_part(), -70);

        let result = FD18::MIN.checked_sub(FD18::ONE);
        assert_eq!(result, Err(NumericError::Underflow));
    }

    #[test]
    fn test_checked_mul() {
        // 2.5 * 4.0 = 10.0
        let a = FD18::from_parts(2, 500_000_000_000_000_000).unwrap();
        let b = FD18::from_integer(4).unwrap();
        let c = a.checked_mul(b).unwrap();
        assert_eq!(c.integer_part(), 10);
        assert_eq!(c.fractional_part(), 0);

        // -1.5 * 1.5 = -2.25
        let x = FD18::from_parts(-1, 500_000_000_000_000_000).unwrap();
        let y = FD18::from_parts(1, 500_000_000_000_000_000).unwrap();
        assert_eq!(x.checked_mul(y).unwrap().to_string(), "-2.250000000000000000");
    }

    #[test]
    fn test_checked_mul_rounding() {
        // 1.5e-18 * 1.0 rounds to 2e-18 at the last place
        let tiny = FD18::from_raw(3);
        let half = FD18::from_raw(500_000_000_000_000_000);
        assert_eq!(tiny.checked_mul(half).unwrap().raw_value(), 2);
        assert_eq!((-tiny).checked_mul(half).unwrap().raw_value(), -2);
    }

    #[test]
    fn test_checked_mul_wide_operands() {
        // Operands whose raw product exceeds i128 but whose result fits.
        let big = FD18::from_integer(1_000_000_000_000).unwrap();
        let small: FD18 = "0.000001".parse().unwrap();
        assert_eq!(big.checked_mul(small).unwrap().integer_part(), 1_000_000);
    }

    #[test]
    fn test_checked_mul_overflow() {
        let large = FD18::from_integer(1_000_000_000_000).unwrap();
        assert_eq!(large.checked_mul(large), Err(NumericError::Overflow));
        assert_eq!(large.checked_mul(-large), Err(NumericError::Underflow));
    }

    #[test]
    fn test_checked_div() {
        let one = FD18::ONE;
        let three = FD18::from_integer(3).unwrap();
        assert_eq!(one.checked_div(three).unwrap().raw_value(), 333_333_333_333_333_333);

        let two = FD18::TWO;
        assert_eq!(two.checked_div(three).unwrap().raw_value(), 666_666_666_666_666_667);
        assert_eq!(one.checked_div(FD18::ZERO), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_saturating_operations() {
        assert_eq!(FD18::MAX + FD18::ONE, FD18::MAX);
        assert_eq!(FD18::MIN - FD18::ONE, FD18::MIN);
        assert_eq!(FD18::MAX * FD18::TWO, FD18::MAX);
        assert_eq!(FD18::MAX * -FD18::TWO, FD18::MIN);
        assert_eq!(FD18::ONE / FD18::ZERO, FD18::MAX);
        assert_eq!(-FD18::ONE / FD18::ZERO, FD18::MIN);
        assert_eq!(FD18::ZERO / FD18::ZERO, FD18::ZERO);
        assert_eq!(-FD18::MIN, FD18::MAX);
        assert_eq!(FD18::MIN.saturating_abs(), FD18::MAX);
    }

    #[test]
    fn test_comparison() {
        let a = FD18::from_integer(100).unwrap();
        let b = FD18::from_integer(50).unwrap();

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a.min(b), b);
        assert_eq!(a.max(b), a);
    }

    #[test]
    fn test_display() {
        let y = FD18::ZERO;
        assert_eq!(y.to_string(), "0.000000000000000000");

        let neg = -FD18::from_parts(0, 100_000_000_000_000_000).unwrap();
        assert_eq!(neg.to_string(), "-0.100000000000000000");
    }

    #[test]
    fn test_from_str() {
        let x: FD18 = "123.456".parse().unwrap();
        assert_eq!(x.integer_part(), 123);
        assert_eq!(x.fractional_part(), 456_000_000_000_000_000);

        let y: FD18 = "-0.001".parse().unwrap();
        assert!(y.is_negative());
        assert_eq!(y.fractional_part(), 1_000_000_000_000_000);
    }

    #[test]
    fn test_from_str_invalid() {
        let result: Result<FD18, _> = "not_a_number".parse();
        assert_eq!(result, Err(NumericError::InvalidInput));

        // 19 decimals
        let result: Result<FD18, _> = "1.1234567890123456789".parse();
        assert_eq!(result, Err(NumericError::PrecisionLoss));
    }

    #[test]
    fn test_abs() {
        let x = FD18::from_integer(-100).unwrap();
        assert_eq!(x.abs().unwrap().integer_part(), 100);
        assert_eq!(FD18::MIN.abs(), Err(NumericError::Overflow));
    }

    #[test]
    fn test_different_decimal_places() {
        type FD4 = FixedDecimal<4>;

        assert_eq!(FD4::SCALE, 10_000);

        let x = FD4::from_parts(123, 4567).unwrap();
        assert_eq!(x.to_string(), "123.4567");
        assert_eq!(x.checked_mul(FD4::TWO).unwrap().to_string(), "246.9134");
    }
}
