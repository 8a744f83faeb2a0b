// ============================================================================
// Fixed-Point Kernels
// The reference kernels in 18-decimal integer arithmetic
// ============================================================================
//
// Every intermediate is a Wad and every operator saturates, so the kernels
// are total: any input, including MIN and MAX, yields a value. Results agree
// with the reference lane to within the accuracy of the approximation.

use super::constants::{
    ERFC_COEFFICIENTS_WAD, ERFC_SATURATION_WAD, IERFC_GUESS_DENOMINATOR_WAD,
    IERFC_GUESS_NUMERATOR_WAD, IERFC_GUESS_SCALE_WAD, IERFC_SENTINEL_WAD, INV_SQRT_TWO_PI_WAD,
    NEWTON_ITERATIONS, SQRT2_WAD, TWO_OVER_SQRT_PI_WAD,
};
use crate::numeric::Wad;

#[inline]
fn horner(t: Wad, coefficients: &[Wad]) -> Wad {
    coefficients
        .iter()
        .rev()
        .fold(Wad::ZERO, |acc, &c| c + t * acc)
}

/// Complementary error function on Wads.
///
/// Beyond |x| = 7 the result is exactly 0 (or 2 for negative x).
pub fn erfc(x: Wad) -> Wad {
    let z = x.saturating_abs();
    if z >= ERFC_SATURATION_WAD {
        return if x.is_negative() { Wad::TWO } else { Wad::ZERO };
    }

    let t = Wad::ONE / (Wad::ONE + z / Wad::TWO);
    let r = t * (horner(t, &ERFC_COEFFICIENTS_WAD) - z * z).saturating_exp();
    if x.is_negative() {
        Wad::TWO - r
    } else {
        r
    }
}

/// Inverse complementary error function on Wads.
///
/// Returns `+100` for `x <= 0` and `-100` for `x >= 2`.
pub fn ierfc(x: Wad) -> Wad {
    if x >= Wad::TWO {
        return -IERFC_SENTINEL_WAD;
    }
    if x <= Wad::ZERO {
        return IERFC_SENTINEL_WAD;
    }

    let xx = if x < Wad::ONE { x } else { Wad::TWO - x };
    // xx >= 1 wei, so xx/2 rounds to at least 1 wei and ln stays finite
    let t = (-Wad::TWO * (xx / Wad::TWO).saturating_ln()).saturating_sqrt();
    let [a0, a1] = IERFC_GUESS_NUMERATOR_WAD;
    let [b1, b2] = IERFC_GUESS_DENOMINATOR_WAD;
    let mut r = -IERFC_GUESS_SCALE_WAD * ((a0 + t * a1) / (Wad::ONE + t * (b1 + t * b2)) - t);

    for _ in 0..NEWTON_ITERATIONS {
        let err = erfc(r) - xx;
        r = r + err / (TWO_OVER_SQRT_PI_WAD * (-(r * r)).saturating_exp() - r * err);
    }

    if x < Wad::ONE {
        r
    } else {
        -r
    }
}

/// Standard normal CDF on Wads.
#[inline]
pub fn cdf(x: Wad) -> Wad {
    Wad::ONE - erfc(x / SQRT2_WAD) / Wad::TWO
}

/// Standard normal quantile on Wads; saturates to `±100·√2` outside (0, 1).
#[inline]
pub fn ppf(p: Wad) -> Wad {
    -(SQRT2_WAD * ierfc(Wad::TWO * p))
}

/// Standard normal density on Wads.
#[inline]
pub fn pdf(x: Wad) -> Wad {
    INV_SQRT_TWO_PI_WAD * (-(x * x) / Wad::TWO).saturating_exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gaussian::reference;

    fn wad(value: f64) -> Wad {
        Wad::from_f64(value).unwrap()
    }

    fn assert_agrees(actual: Wad, expected: f64, tolerance: f64) {
        let diff = (actual.to_f64() - expected).abs();
        assert!(
            diff <= tolerance,
            "expected {expected}, got {actual} (diff {diff:e})"
        );
    }

    #[test]
    fn test_erfc_agrees_with_reference() {
        for &x in &[-4.0, -2.5, -1.0, -0.3, 0.0, 0.3, 1.0, 2.5, 4.0, 6.9] {
            assert_agrees(erfc(wad(x)), reference::erfc(x), 1e-12);
        }
    }

    #[test]
    fn test_erfc_saturation() {
        assert_eq!(erfc(wad(7.0)), Wad::ZERO);
        assert_eq!(erfc(wad(-7.0)), Wad::TWO);
        assert_eq!(erfc(Wad::MAX), Wad::ZERO);
        assert_eq!(erfc(Wad::MIN), Wad::TWO);
    }

    #[test]
    fn test_erfc_reflection() {
        for &x in &[0.1, 0.75, 1.9, 3.3] {
            assert_eq!(erfc(-wad(x)), Wad::TWO - erfc(wad(x)));
        }
    }

    #[test]
    fn test_ierfc_sentinels() {
        let hundred = Wad::from_integer(100).unwrap();
        assert_eq!(ierfc(Wad::ZERO), hundred);
        assert_eq!(ierfc(-Wad::ONE), hundred);
        assert_eq!(ierfc(Wad::MIN), hundred);
        assert_eq!(ierfc(Wad::TWO), -hundred);
        assert_eq!(ierfc(Wad::MAX), -hundred);
    }

    #[test]
    fn test_ierfc_agrees_with_reference() {
        for &x in &[1e-6, 0.01, 0.25, 0.5, 1.0, 1.3, 1.75, 1.99, 2.0 - 1e-6] {
            assert_agrees(ierfc(wad(x)), reference::ierfc(x), 1e-9);
        }
    }

    #[test]
    fn test_ierfc_tiny_input_stays_finite() {
        let r = ierfc(Wad::from_raw(1));
        assert!(r > Wad::from_integer(5).unwrap());
        assert!(r < Wad::from_integer(7).unwrap());
    }

    #[test]
    fn test_cdf_and_ppf() {
        assert_agrees(cdf(Wad::ZERO), 0.5, 1e-7);
        assert_agrees(cdf(-Wad::ONE), 0.158_655_253_931_457_05, 1e-7);
        assert_agrees(ppf(wad(0.5)), 0.0, 1e-6);
        assert_agrees(ppf(wad(0.975)), 1.959_963_984_540_054, 1e-6);
        for &p in &[0.01, 0.2, 0.5, 0.8, 0.99] {
            assert_agrees(ppf(wad(p)), reference::ppf(p), 1e-9);
        }
    }

    #[test]
    fn test_ppf_saturation_is_exact() {
        let saturation = Wad::from_raw(141_421_356_237_309_504_900);
        assert_eq!(ppf(Wad::ONE), saturation);
        assert_eq!(ppf(Wad::ZERO), -saturation);
    }

    #[test]
    fn test_pdf() {
        assert_eq!(pdf(Wad::ZERO), INV_SQRT_TWO_PI_WAD);
        assert_agrees(pdf(Wad::ONE), 0.241_970_724_519_143_37, 1e-15);
        assert_eq!(pdf(Wad::MAX), Wad::ZERO);
    }
}
