// ============================================================================
// Normal Model Interface
// Defines the real-valued contract both numeric lanes implement
// ============================================================================

use crate::domain::{Operation, RowError, RowResult, Word, WordKind};
use crate::invariant::{Curve, InvariantArgs, InvariantResult, YEAR};

/// Real-valued view of the standard normal kernels and the trading curve.
/// Implementations: ReferenceModel (binary64), FixedPointModel (Wad).
///
/// Arguments and results cross the interface as `f64`; an implementation
/// converts to its own representation internally. The shared property suite
/// runs against every implementation through this trait.
pub trait NormalModel: Send + Sync {
    /// Get the lane name for logging and reports
    fn name(&self) -> &str;

    fn erfc(&self, x: f64) -> f64;

    /// Inverse of `erfc`; ±100 outside (0, 2)
    fn ierfc(&self, x: f64) -> f64;

    fn cdf(&self, x: f64) -> f64;

    /// Inverse of `cdf`; ±100√2 outside (0, 1)
    fn ppf(&self, p: f64) -> f64;

    fn pdf(&self, x: f64) -> f64;

    /// Stable reserve implied by `args.x` on `args.curve`
    ///
    /// # Errors
    /// `DomainViolation` for invalid curve parameters.
    fn get_y(&self, args: &InvariantArgs) -> InvariantResult<f64>;

    /// Risky reserve implied by stable reserve `y`
    ///
    /// # Errors
    /// `DomainViolation` for invalid curve parameters or a zero strike.
    fn get_x(&self, y: f64, curve: &Curve) -> InvariantResult<f64>;

    /// `y − getY(args)`
    ///
    /// # Errors
    /// Propagates `get_y`'s failures.
    fn invariant(&self, y: f64, args: &InvariantArgs) -> InvariantResult<f64>;

    /// Evaluate one vector row of `operation`.
    ///
    /// Default implementation reads each word as the nearest `f64` (`t` in
    /// years) and calls the methods above, so it accepts any 256-bit row. A
    /// lane that can consume the integer words exactly should override this.
    ///
    /// # Errors
    /// `ArityMismatch` for a row of the wrong width, `Invariant` when the
    /// lane rejects the arguments.
    fn evaluate(&self, operation: Operation, row: &[Word]) -> RowResult<f64> {
        let real = |word: &Word| word.to_real(operation.input_kind());
        let years = |word: &Word| word.to_f64(WordKind::Unsigned) / YEAR as f64;

        let value = match (operation, row) {
            (Operation::Erfc, [x]) => self.erfc(real(x)),
            (Operation::Ierfc, [x]) => self.ierfc(real(x)),
            (Operation::Cdf, [x]) => self.cdf(real(x)),
            (Operation::Ppf, [p]) => self.ppf(real(p)),
            (Operation::GetY, [x, k, o, t]) => {
                self.get_y(&InvariantArgs::new(real(x), real(k), real(o), years(t)))?
            },
            (Operation::GetX, [y, k, o, t]) => {
                self.get_x(real(y), &Curve::new(real(k), real(o), years(t)))?
            },
            (Operation::Invariant, [y, x, k, o, t]) => self.invariant(
                real(y),
                &InvariantArgs::new(real(x), real(k), real(o), years(t)),
            )?,
            _ => return Err(RowError::arity(operation, row.len())),
        };
        Ok(value)
    }
}
