// ============================================================================
// Fixed-Point Trading Curve
// getY / getX / invariant on Wads, tau in seconds
// ============================================================================
//
// Curve arithmetic is checked: a reserve or strike large enough to overflow
// an intermediate surfaces as InvariantError::Numeric instead of saturating.
// The normal kernels themselves stay saturating.

use super::args::{WadArgs, WadCurve};
use super::errors::{InvariantError, InvariantResult};
use crate::gaussian::fixed::{cdf, ppf};
use crate::numeric::Wad;

/// Stable reserve implied by risky reserve `x`.
///
/// # Errors
/// `DomainViolation` for negative parameters, `Numeric` on overflow.
pub fn get_y(args: &WadArgs) -> InvariantResult<Wad> {
    let curve = &args.curve;
    curve.validate()?;

    let remaining = Wad::ONE.checked_sub(args.x)?;
    if curve.tau == 0 {
        return Ok(curve.strike.checked_mul(remaining)?);
    }

    let shifted = ppf(remaining).checked_sub(curve.sigma_sqrt_tau()?)?;
    Ok(curve.strike.checked_mul(cdf(shifted))?)
}

/// Risky reserve implied by stable reserve `y`.
///
/// # Errors
/// `DomainViolation` for negative parameters or a zero strike, `Numeric`
/// on overflow.
pub fn get_x(y: Wad, curve: &WadCurve) -> InvariantResult<Wad> {
    curve.validate()?;
    if curve.strike.is_zero() {
        return Err(InvariantError::domain("strike", "strike must be positive"));
    }

    // ppf saturates for any ratio >= 1, so a saturated quotient loses nothing
    let quantile = ppf(y.saturating_div(curve.strike));
    let shifted = quantile.checked_add(curve.sigma_sqrt_tau()?)?;
    Ok(Wad::ONE.checked_sub(cdf(shifted))?)
}

/// `y − getY(args)`.
///
/// # Errors
/// Propagates [`get_y`]'s failures; `Numeric` if the difference overflows.
pub fn invariant(y: Wad, args: &WadArgs) -> InvariantResult<Wad> {
    Ok(y.checked_sub(get_y(args)?)?)
}
