// ============================================================================
// Reference Trading Curve
// getY / getX / invariant in binary64, tau in years
// ============================================================================

use super::args::{Curve, InvariantArgs};
use super::errors::{InvariantError, InvariantResult};
use crate::gaussian::reference::{cdf, ppf};

/// Stable reserve implied by risky reserve `x`:
/// `K·Φ(Φ⁻¹(1 − x) − o√t)`, or `K·(1 − x)` at maturity.
///
/// # Errors
/// `DomainViolation` for a negative or non-finite parameter.
pub fn get_y(args: &InvariantArgs) -> InvariantResult<f64> {
    args.validate()?;
    let curve = &args.curve;
    if curve.tau == 0.0 {
        return Ok(curve.strike * (1.0 - args.x));
    }
    Ok(curve.strike * cdf(ppf(1.0 - args.x) - curve.sigma_sqrt_tau()))
}

/// Risky reserve implied by stable reserve `y`:
/// `1 − Φ(Φ⁻¹(y/K) + o√t)`.
///
/// # Errors
/// `DomainViolation` for an invalid curve, a zero strike or a non-finite `y`.
pub fn get_x(y: f64, curve: &Curve) -> InvariantResult<f64> {
    validate_quote(y)?;
    curve.validate()?;
    if curve.strike == 0.0 {
        return Err(InvariantError::domain("strike", "strike must be positive"));
    }
    Ok(1.0 - cdf(ppf(y / curve.strike) + curve.sigma_sqrt_tau()))
}

/// `y − getY(args)`: zero when the quote is consistent with the curve.
///
/// # Errors
/// Propagates [`get_y`]'s failures; `DomainViolation` for a non-finite `y`.
pub fn invariant(y: f64, args: &InvariantArgs) -> InvariantResult<f64> {
    validate_quote(y)?;
    Ok(y - get_y(args)?)
}

#[inline]
fn validate_quote(y: f64) -> InvariantResult<()> {
    if y.is_finite() {
        Ok(())
    } else {
        Err(InvariantError::domain("y", "quote must be finite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUOTE: f64 = 0.308_537_538_726;

    #[test]
    fn test_get_y_at_maturity() {
        let args = InvariantArgs::new(0.5, 1.0, 1.0, 0.0);
        assert_eq!(get_y(&args).unwrap(), 0.5);

        let args = InvariantArgs::new(0.25, 4.0, 0.3, 0.0);
        assert_eq!(get_y(&args).unwrap(), 3.0);
    }

    #[test]
    fn test_get_y_one_year() {
        let args = InvariantArgs::new(0.5, 1.0, 1.0, 1.0);
        let y = get_y(&args).unwrap();
        assert!((y - 0.158_655_253_931_457_05).abs() < 1e-6);
        assert!((y - cdf(-1.0)).abs() < 1e-7);
    }

    #[test]
    fn test_get_x_scenario() {
        let x = get_x(QUOTE, &Curve::new(1.0, 1.0, 1.0)).unwrap();
        assert!((x - QUOTE).abs() < 1e-7, "got {x}");
    }

    #[test]
    fn test_invariant_scenarios() {
        let at_maturity = InvariantArgs::new(QUOTE, 1.0, 1.0, 0.0);
        let k = invariant(QUOTE, &at_maturity).unwrap();
        assert!((k - (QUOTE - (1.0 - QUOTE))).abs() < 1e-12);

        let one_year = InvariantArgs::new(QUOTE, 1.0, 1.0, 1.0);
        let k = invariant(QUOTE, &one_year).unwrap();
        assert!(k.abs() < 1e-7, "got {k}");
    }

    #[test]
    fn test_invariant_of_implied_quote_is_zero() {
        for &(x, strike, sigma, tau) in &[
            (0.1, 1.0, 0.5, 0.25),
            (0.5, 2000.0, 1.2, 2.0),
            (0.9, 3.5, 0.05, 10.0),
        ] {
            let args = InvariantArgs::new(x, strike, sigma, tau);
            let y = get_y(&args).unwrap();
            assert_eq!(invariant(y, &args).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_get_x_inverts_get_y() {
        let args = InvariantArgs::new(0.3, 1.0, 0.8, 0.5);
        let y = get_y(&args).unwrap();
        let x = get_x(y, &args.curve).unwrap();
        assert!((x - 0.3).abs() < 1e-6, "got {x}");
    }

    #[test]
    fn test_negative_tau_fails() {
        let args = InvariantArgs::new(0.5, 1.0, 1.0, -1.0);
        assert!(matches!(
            get_y(&args),
            Err(InvariantError::DomainViolation { parameter: "tau", .. })
        ));
        assert!(get_x(0.5, &args.curve).is_err());
        assert!(invariant(0.5, &args).is_err());
    }

    #[test]
    fn test_zero_strike_fails_for_get_x() {
        assert!(matches!(
            get_x(0.5, &Curve::new(0.0, 1.0, 1.0)),
            Err(InvariantError::DomainViolation { parameter: "strike", .. })
        ));
        assert!(get_x(f64::NAN, &Curve::new(1.0, 1.0, 1.0)).is_err());
    }
}
