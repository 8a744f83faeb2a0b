// ============================================================================
// Curve Parameters
// Strike, volatility and time to maturity, in each lane's representation
// ============================================================================

use super::errors::{InvariantError, InvariantResult};
use crate::numeric::{NumericError, Wad};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Seconds per year (365.2425 days); converts fixed-lane `tau` to years.
pub const YEAR: i64 = 31_556_952;

// ============================================================================
// Reference Lane
// ============================================================================

/// Curve parameters in binary64, `tau` in years.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Curve {
    /// Strike price K
    pub strike: f64,
    /// Implied volatility o
    pub sigma: f64,
    /// Time to maturity t, in years
    pub tau: f64,
}

impl Curve {
    pub const fn new(strike: f64, sigma: f64, tau: f64) -> Self {
        Self { strike, sigma, tau }
    }

    /// Check the parameter domain: all finite, all non-negative.
    ///
    /// # Errors
    /// `DomainViolation` naming the first offending parameter.
    pub fn validate(&self) -> InvariantResult<()> {
        if !self.tau.is_finite() || self.tau < 0.0 {
            return Err(InvariantError::domain(
                "tau",
                "time to maturity must be finite and non-negative",
            ));
        }
        if !self.sigma.is_finite() || self.sigma < 0.0 {
            return Err(InvariantError::domain(
                "sigma",
                "volatility must be finite and non-negative",
            ));
        }
        if !self.strike.is_finite() || self.strike < 0.0 {
            return Err(InvariantError::domain(
                "strike",
                "strike must be finite and non-negative",
            ));
        }
        Ok(())
    }

    /// `o·√t`, the distance the curve shifts the quantile.
    #[inline]
    pub fn sigma_sqrt_tau(&self) -> f64 {
        self.sigma * self.tau.sqrt()
    }
}

/// Risky reserve plus curve, in binary64.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InvariantArgs {
    /// Risky-asset reserve per unit of liquidity, in [0, 1]
    pub x: f64,
    pub curve: Curve,
}

impl InvariantArgs {
    pub const fn new(x: f64, strike: f64, sigma: f64, tau: f64) -> Self {
        Self {
            x,
            curve: Curve::new(strike, sigma, tau),
        }
    }

    /// # Errors
    /// `DomainViolation` for a non-finite reserve or an invalid curve.
    pub fn validate(&self) -> InvariantResult<()> {
        if !self.x.is_finite() {
            return Err(InvariantError::domain("x", "reserve must be finite"));
        }
        self.curve.validate()
    }
}

// ============================================================================
// Fixed-Point Lane
// ============================================================================

/// Curve parameters in Wads, `tau` in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WadCurve {
    pub strike: Wad,
    pub sigma: Wad,
    /// Time to maturity, in seconds
    pub tau: i64,
}

impl WadCurve {
    pub const fn new(strike: Wad, sigma: Wad, tau: i64) -> Self {
        Self { strike, sigma, tau }
    }

    /// Convert a reference curve, rounding `tau` to the nearest second.
    ///
    /// # Errors
    /// `DomainViolation` if the curve is invalid, `Numeric` if a value does
    /// not fit a Wad.
    pub fn from_curve(curve: &Curve) -> InvariantResult<Self> {
        curve.validate()?;
        let seconds = (curve.tau * YEAR as f64).round();
        if seconds > i64::MAX as f64 {
            return Err(NumericError::Overflow.into());
        }
        Ok(Self {
            strike: Wad::from_f64(curve.strike)?,
            sigma: Wad::from_f64(curve.sigma)?,
            tau: seconds as i64,
        })
    }

    /// # Errors
    /// `DomainViolation` naming the first negative parameter.
    pub fn validate(&self) -> InvariantResult<()> {
        if self.tau < 0 {
            return Err(InvariantError::domain(
                "tau",
                "time to maturity must be non-negative",
            ));
        }
        if self.sigma.is_negative() {
            return Err(InvariantError::domain(
                "sigma",
                "volatility must be non-negative",
            ));
        }
        if self.strike.is_negative() {
            return Err(InvariantError::domain("strike", "strike must be non-negative"));
        }
        Ok(())
    }

    /// Time to maturity in years.
    pub fn tau_years(&self) -> InvariantResult<Wad> {
        let seconds = Wad::from_integer(self.tau)?;
        let year = Wad::from_integer(YEAR)?;
        Ok(seconds.checked_div(year)?)
    }

    /// `o·√(t / YEAR)`.
    pub fn sigma_sqrt_tau(&self) -> InvariantResult<Wad> {
        let root = self.tau_years()?.sqrt()?;
        Ok(self.sigma.checked_mul(root)?)
    }
}

/// Risky reserve plus curve, in Wads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WadArgs {
    pub x: Wad,
    pub curve: WadCurve,
}

impl WadArgs {
    pub const fn new(x: Wad, strike: Wad, sigma: Wad, tau: i64) -> Self {
        Self {
            x,
            curve: WadCurve::new(strike, sigma, tau),
        }
    }

    /// # Errors
    /// See [`WadCurve::from_curve`].
    pub fn from_args(args: &InvariantArgs) -> InvariantResult<Self> {
        if !args.x.is_finite() {
            return Err(InvariantError::domain("x", "reserve must be finite"));
        }
        Ok(Self {
            x: Wad::from_f64(args.x)?,
            curve: WadCurve::from_curve(&args.curve)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_validation() {
        assert!(Curve::new(1.0, 1.0, 0.0).validate().is_ok());
        assert!(matches!(
            Curve::new(1.0, 1.0, -1.0).validate(),
            Err(InvariantError::DomainViolation { parameter: "tau", .. })
        ));
        assert!(matches!(
            Curve::new(1.0, -0.1, 1.0).validate(),
            Err(InvariantError::DomainViolation { parameter: "sigma", .. })
        ));
        assert!(matches!(
            Curve::new(f64::NAN, 1.0, 1.0).validate(),
            Err(InvariantError::DomainViolation { parameter: "strike", .. })
        ));
        assert!(InvariantArgs::new(f64::INFINITY, 1.0, 1.0, 1.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_wad_curve_from_curve() {
        let curve = WadCurve::from_curve(&Curve::new(1.5, 0.25, 1.0)).unwrap();
        assert_eq!(curve.strike, Wad::from_raw(1_500_000_000_000_000_000));
        assert_eq!(curve.sigma, Wad::from_raw(250_000_000_000_000_000));
        assert_eq!(curve.tau, YEAR);

        let half = WadCurve::from_curve(&Curve::new(1.0, 1.0, 0.5)).unwrap();
        assert_eq!(half.tau, YEAR / 2);
    }

    #[test]
    fn test_wad_curve_validation() {
        let negative_tau = WadCurve::new(Wad::ONE, Wad::ONE, -1);
        assert!(matches!(
            negative_tau.validate(),
            Err(InvariantError::DomainViolation { parameter: "tau", .. })
        ));
        let negative_strike = WadCurve::new(-Wad::ONE, Wad::ONE, 0);
        assert!(negative_strike.validate().is_err());
    }

    #[test]
    fn test_sigma_sqrt_tau() {
        let one_year = WadCurve::new(Wad::ONE, Wad::TWO, YEAR);
        assert_eq!(one_year.tau_years().unwrap(), Wad::ONE);
        assert_eq!(one_year.sigma_sqrt_tau().unwrap(), Wad::TWO);

        let four_years = WadCurve::new(Wad::ONE, Wad::ONE, 4 * YEAR);
        assert_eq!(four_years.sigma_sqrt_tau().unwrap(), Wad::TWO);

        assert_eq!(Curve::new(1.0, 2.0, 4.0).sigma_sqrt_tau(), 4.0);
    }
}
