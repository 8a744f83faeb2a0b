// ============================================================================
// Reference Kernels
// Standard-normal erfc, ierfc, cdf, ppf and pdf in binary64
// ============================================================================
//
// This lane defines the expected values of the differential harness. It is
// deliberately the same algorithm as the fixed-point lane (same coefficients,
// same initial guess, same fixed iteration count) so that any disagreement is
// representation error, not algorithmic difference.

use super::constants::{
    ERFC_COEFFICIENTS, IERFC_GUESS_DENOMINATOR, IERFC_GUESS_NUMERATOR, IERFC_GUESS_SCALE,
    IERFC_SENTINEL, INV_SQRT_TWO_PI, NEWTON_ITERATIONS,
};
use std::f64::consts::{FRAC_2_SQRT_PI, SQRT_2};

/// Evaluate `c[0] + t·(c[1] + t·(... + t·c[n-1]))`.
#[inline]
fn horner(t: f64, coefficients: &[f64]) -> f64 {
    coefficients
        .iter()
        .rev()
        .fold(0.0, |acc, &c| c + t * acc)
}

/// Complementary error function, absolute error below 1.2e-7.
///
/// Output lies in [0, 2] for finite input; `erfc(-x) = 2 - erfc(x)` holds
/// exactly by construction.
#[inline]
pub fn erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);
    let r = t * (horner(t, &ERFC_COEFFICIENTS) - z * z).exp();
    if x >= 0.0 {
        r
    } else {
        2.0 - r
    }
}

/// Inverse complementary error function.
///
/// Inputs at or below 0 return `+100`, inputs at or above 2 return `-100`.
/// These sentinels are finite stand-ins for ±∞; callers treat magnitudes of
/// 100 or more as out of domain.
pub fn ierfc(x: f64) -> f64 {
    if x >= 2.0 {
        return -IERFC_SENTINEL;
    }
    if x <= 0.0 {
        return IERFC_SENTINEL;
    }

    let xx = if x < 1.0 { x } else { 2.0 - x };
    let t = (-2.0 * (0.5 * xx).ln()).sqrt();
    let [a0, a1] = IERFC_GUESS_NUMERATOR;
    let [b1, b2] = IERFC_GUESS_DENOMINATOR;
    let mut r = -IERFC_GUESS_SCALE * ((a0 + t * a1) / (1.0 + t * (b1 + t * b2)) - t);

    for _ in 0..NEWTON_ITERATIONS {
        let err = erfc(r) - xx;
        r += err / (FRAC_2_SQRT_PI * (-r * r).exp() - r * err);
    }

    if x < 1.0 {
        r
    } else {
        -r
    }
}

/// Standard normal cumulative distribution `Φ(x) = 1 - erfc(x/√2)/2`.
#[inline]
pub fn cdf(x: f64) -> f64 {
    1.0 - 0.5 * erfc(x / SQRT_2)
}

/// Standard normal quantile `Φ⁻¹(p) = -√2·ierfc(2p)`.
///
/// Saturates to `±100√2` outside (0, 1).
#[inline]
pub fn ppf(p: f64) -> f64 {
    -SQRT_2 * ierfc(2.0 * p)
}

/// Standard normal density `φ(x) = e^(-x²/2)/√(2π)`.
#[inline]
pub fn pdf(x: f64) -> f64 {
    INV_SQRT_TWO_PI * (-0.5 * x * x).exp()
}
