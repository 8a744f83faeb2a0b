// ============================================================================
// Gaussian Module
// Standard normal kernels in two numeric lanes
// ============================================================================
//
// This module provides:
// - reference: binary64 erfc / ierfc / cdf / ppf / pdf
// - fixed: the same functions on 18-decimal Wads
// - The approximation constants both lanes share
//
// Accuracy contract (both lanes):
// - erfc: absolute error below 1.2e-7
// - ierfc: erfc(ierfc(x)) within 1e-6 of x on (0, 2)
// - cdf / ppf: inherit the erfc / ierfc bounds
// - ierfc returns ±100 outside (0, 2); treat |result| >= 100 as out of domain

mod constants;
pub mod fixed;
pub mod reference;

pub use constants::{IERFC_SENTINEL, NEWTON_ITERATIONS, PPF_SATURATION};

/// True when a reference-lane ierfc/ppf result is a saturation sentinel
/// rather than a real quantile.
#[inline]
pub fn is_saturated(value: f64) -> bool {
    value.abs() >= IERFC_SENTINEL
}
