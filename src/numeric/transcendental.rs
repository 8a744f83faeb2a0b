// ============================================================================
// Wad Transcendentals
// exp, ln and sqrt for 18-decimal fixed point without floating point
// ============================================================================
//
// exp: range reduction x = k·ln2 + r with |r| <= ln2/2, Taylor series for e^r,
//      then a binary shift by k.
// ln:  normalisation x = m·2^k with m in [1, 2), then the atanh series
//      ln(m) = 2·(s + s³/3 + s⁵/5 + ...) with s = (m-1)/(m+1) <= 1/3.
// sqrt: integer square root of x·10^18 on a 256-bit intermediate, rounded to
//      nearest.
//
// Every series runs at most SERIES_TERMS steps, so each call is bounded.

use super::errors::{NumericError, NumericResult};
use super::fixed_decimal::Wad;
use primitive_types::U256;

const SCALE: i128 = Wad::SCALE;

/// ln(2) at 18 decimals
const LN2: i128 = 693_147_180_559_945_309;

/// ln(0.5e-18): below this e^x rounds to zero wei
const MIN_EXP_ARG: i128 = -42_139_678_854_452_767_551;

/// e^46 · 10^18 still fits in i128 (e^46.58 does not)
const MAX_EXP_ARG: i128 = 46_000_000_000_000_000_000;

/// Upper bound on series steps; both series converge well before this
const SERIES_TERMS: i128 = 40;

/// Integer division rounding half away from zero, `b > 0`.
#[inline]
fn div_round(a: i128, b: i128) -> i128 {
    if a >= 0 {
        (a + b / 2) / b
    } else {
        -((-a + b / 2) / b)
    }
}

/// Natural log of a strictly positive raw value.
fn ln_raw(x: i128) -> i128 {
    debug_assert!(x > 0);

    let bits = 128 - x.leading_zeros() as i32;
    let scale_bits = 128 - SCALE.leading_zeros() as i32;

    // x = m · 2^k, m in [SCALE, 2·SCALE)
    let mut k = bits - scale_bits;
    let mut m = if k > 0 {
        (x >> k) + ((x >> (k - 1)) & 1)
    } else {
        x << -k
    };
    if m < SCALE {
        m <<= 1;
        k -= 1;
    }

    let s = div_round((m - SCALE) * SCALE, m + SCALE);
    let s2 = div_round(s * s, SCALE);

    let mut sum = s;
    let mut power = s;
    for n in 1..SERIES_TERMS {
        power = div_round(power * s2, SCALE);
        if power == 0 {
            break;
        }
        sum += div_round(power, 2 * n + 1);
    }

    (k as i128) * LN2 + 2 * sum
}

impl Wad {
    /// Natural exponential.
    ///
    /// Arguments below ln(0.5e-18) return zero, the nearest representable
    /// value.
    ///
    /// # Errors
    /// Returns `Overflow` for arguments above 46.
    pub fn exp(self) -> NumericResult<Self> {
        let x = self.raw_value();
        if x < MIN_EXP_ARG {
            return Ok(Self::ZERO);
        }
        if x > MAX_EXP_ARG {
            return Err(NumericError::Overflow);
        }

        let k = div_round(x, LN2);
        let r = x - k * LN2;

        let mut sum = SCALE;
        let mut term = SCALE;
        for n in 1..=SERIES_TERMS {
            term = div_round(term * r, n * SCALE);
            if term == 0 {
                break;
            }
            sum += term;
        }

        if k >= 0 {
            sum.checked_mul(1i128 << k)
                .map(Self::from_raw)
                .ok_or(NumericError::Overflow)
        } else {
            let shift = -k;
            Ok(Self::from_raw((sum + (1i128 << (shift - 1))) >> shift))
        }
    }

    /// Natural logarithm.
    ///
    /// # Errors
    /// Returns `OutOfDomain` for `self <= 0`.
    pub fn ln(self) -> NumericResult<Self> {
        let x = self.raw_value();
        if x <= 0 {
            return Err(NumericError::OutOfDomain { function: "ln" });
        }
        Ok(Self::from_raw(ln_raw(x)))
    }

    /// Square root, rounded to the nearest wei.
    ///
    /// # Errors
    /// Returns `OutOfDomain` for negative values.
    pub fn sqrt(self) -> NumericResult<Self> {
        let x = self.raw_value();
        if x < 0 {
            return Err(NumericError::OutOfDomain { function: "sqrt" });
        }

        let n = U256::from(x as u128) * U256::from(SCALE as u128);
        let root = n.integer_sqrt();
        // nearest: round up when n lies past (root + 1/2)^2
        let root = if n - root * root > root {
            root + U256::one()
        } else {
            root
        };

        Ok(Self::from_raw(root.low_u128() as i128))
    }

    /// `exp`, saturating to `MAX` on overflow.
    #[inline]
    pub fn saturating_exp(self) -> Self {
        self.exp().unwrap_or(Self::MAX)
    }

    /// `ln`, saturating to `MIN` (ln 0⁺ = -∞) for non-positive input.
    #[inline]
    pub fn saturating_ln(self) -> Self {
        let x = self.raw_value();
        if x <= 0 {
            Self::MIN
        } else {
            Self::from_raw(ln_raw(x))
        }
    }

    /// `sqrt`, saturating to zero for negative input.
    #[inline]
    pub fn saturating_sqrt(self) -> Self {
        self.sqrt().unwrap_or(Self::ZERO)
    }
}
