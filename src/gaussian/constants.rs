// ============================================================================
// Approximation Parameters
// Coefficients shared by the reference and fixed-point kernels
// ============================================================================
//
// These are part of the accuracy contract, not configuration: changing them
// changes the error bound, never the shape of the computation. Each lane keeps
// its own copy in its own representation; the Wad literals are the f64 literals
// scaled by 10^18 exactly.

use crate::numeric::Wad;

/// Chebyshev fit of erfc (Numerical Recipes `erfcc`), absolute error below
/// 1.2e-7 everywhere. `P(t) = c0 + t·(c1 + t·(c2 + ... + t·c9))`.
pub const ERFC_COEFFICIENTS: [f64; 10] = [
    -1.265_512_23,
    1.000_023_68,
    0.374_091_96,
    0.096_784_18,
    -0.186_288_06,
    0.278_868_07,
    -1.135_203_98,
    1.488_515_87,
    -0.822_152_23,
    0.170_872_77,
];

pub const ERFC_COEFFICIENTS_WAD: [Wad; 10] = [
    Wad::from_raw(-1_265_512_230_000_000_000),
    Wad::from_raw(1_000_023_680_000_000_000),
    Wad::from_raw(374_091_960_000_000_000),
    Wad::from_raw(96_784_180_000_000_000),
    Wad::from_raw(-186_288_060_000_000_000),
    Wad::from_raw(278_868_070_000_000_000),
    Wad::from_raw(-1_135_203_980_000_000_000),
    Wad::from_raw(1_488_515_870_000_000_000),
    Wad::from_raw(-822_152_230_000_000_000),
    Wad::from_raw(170_872_770_000_000_000),
];

/// Initial guess for erfc⁻¹ (Abramowitz & Stegun 26.2.22, accurate to 3e-3):
/// `r0 = -k·((a0 + a1·t)/(1 + t·(b1 + b2·t)) - t)` with `k ≈ 1/√2`.
pub const IERFC_GUESS_SCALE: f64 = 0.707_11;
pub const IERFC_GUESS_NUMERATOR: [f64; 2] = [2.307_53, 0.270_61];
pub const IERFC_GUESS_DENOMINATOR: [f64; 2] = [0.992_29, 0.044_81];

pub const IERFC_GUESS_SCALE_WAD: Wad = Wad::from_raw(707_110_000_000_000_000);
pub const IERFC_GUESS_NUMERATOR_WAD: [Wad; 2] = [
    Wad::from_raw(2_307_530_000_000_000_000),
    Wad::from_raw(270_610_000_000_000_000),
];
pub const IERFC_GUESS_DENOMINATOR_WAD: [Wad; 2] = [
    Wad::from_raw(992_290_000_000_000_000),
    Wad::from_raw(44_810_000_000_000_000),
];

/// Halley refinements of the initial guess. Each step roughly cubes the
/// error, so two steps take 3e-3 below the erfc fit's own error.
pub const NEWTON_ITERATIONS: usize = 2;

/// ierfc of anything at or beyond the ends of (0, 2); stands in for ±∞.
pub const IERFC_SENTINEL: f64 = 100.0;
pub const IERFC_SENTINEL_WAD: Wad = Wad::from_raw(100_000_000_000_000_000_000);

/// ppf of anything at or beyond the ends of (0, 1): √2 · 100.
pub const PPF_SATURATION: f64 = std::f64::consts::SQRT_2 * IERFC_SENTINEL;

/// 2/√π, the derivative scale of erfc
pub const TWO_OVER_SQRT_PI_WAD: Wad = Wad::from_raw(1_128_379_167_095_512_574);

/// √2
pub const SQRT2_WAD: Wad = Wad::from_raw(1_414_213_562_373_095_049);

/// 1/√(2π), the normal density at zero
pub const INV_SQRT_TWO_PI: f64 = 0.398_942_280_401_432_7;
pub const INV_SQRT_TWO_PI_WAD: Wad = Wad::from_raw(398_942_280_401_432_678);

/// erfc(7) < 1e-22: past this |x| the fixed-point result is 0 (or 2) wei,
/// and z² would otherwise leave the i128 range for huge inputs.
pub const ERFC_SATURATION_WAD: Wad = Wad::from_raw(7_000_000_000_000_000_000);
