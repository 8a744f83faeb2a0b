// ============================================================================
// Fixed-Point Model
// The 18-decimal lane behind the NormalModel interface
// ============================================================================

use crate::domain::{Operation, RowError, RowResult, Word};
use crate::gaussian::fixed as kernels;
use crate::interfaces::NormalModel;
use crate::invariant::{fixed as curve, Curve, InvariantArgs, InvariantResult, WadArgs, WadCurve};
use crate::numeric::Wad;

/// Wad lane, the representation used on-chain.
///
/// Real-valued calls round their arguments to the nearest wei (saturating
/// at the i128 range) and return the Wad result as `f64`; NaN in gives NaN
/// out. Vector rows are evaluated on the integer words directly, with no
/// float in between, and a word the i128 lane cannot hold is reported as
/// out of lane.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPointModel;

impl FixedPointModel {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn lift(x: f64, kernel: fn(Wad) -> Wad) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        kernel(Wad::saturating_from_f64(x)).to_f64()
    }
}

impl NormalModel for FixedPointModel {
    fn name(&self) -> &str {
        "fixed-point"
    }

    fn erfc(&self, x: f64) -> f64 {
        Self::lift(x, kernels::erfc)
    }

    fn ierfc(&self, x: f64) -> f64 {
        Self::lift(x, kernels::ierfc)
    }

    fn cdf(&self, x: f64) -> f64 {
        Self::lift(x, kernels::cdf)
    }

    fn ppf(&self, p: f64) -> f64 {
        Self::lift(p, kernels::ppf)
    }

    fn pdf(&self, x: f64) -> f64 {
        Self::lift(x, kernels::pdf)
    }

    fn get_y(&self, args: &InvariantArgs) -> InvariantResult<f64> {
        curve::get_y(&WadArgs::from_args(args)?).map(Wad::to_f64)
    }

    fn get_x(&self, y: f64, curve: &Curve) -> InvariantResult<f64> {
        let wad_curve = WadCurve::from_curve(curve)?;
        curve::get_x(Wad::from_f64(y)?, &wad_curve).map(Wad::to_f64)
    }

    fn invariant(&self, y: f64, args: &InvariantArgs) -> InvariantResult<f64> {
        let wad_args = WadArgs::from_args(args)?;
        curve::invariant(Wad::from_f64(y)?, &wad_args).map(Wad::to_f64)
    }

    fn evaluate(&self, operation: Operation, row: &[Word]) -> RowResult<f64> {
        operation.check_arity(row)?;
        let kind = operation.input_kind();
        let out_of_lane = |position| RowError::OutOfLane {
            operation,
            position,
        };
        let wad = |position: usize| row[position].to_wad(kind).ok_or(out_of_lane(position));
        let seconds = |position: usize| {
            row[position]
                .to_i128(kind)
                .and_then(|raw| i64::try_from(raw).ok())
                .ok_or(out_of_lane(position))
        };

        let value = match operation {
            Operation::Erfc => kernels::erfc(wad(0)?),
            Operation::Ierfc => kernels::ierfc(wad(0)?),
            Operation::Cdf => kernels::cdf(wad(0)?),
            Operation::Ppf => kernels::ppf(wad(0)?),
            Operation::GetY => {
                curve::get_y(&WadArgs::new(wad(0)?, wad(1)?, wad(2)?, seconds(3)?))?
            },
            Operation::GetX => {
                curve::get_x(wad(0)?, &WadCurve::new(wad(1)?, wad(2)?, seconds(3)?))?
            },
            Operation::Invariant => {
                let args = WadArgs::new(wad(1)?, wad(2)?, wad(3)?, seconds(4)?);
                curve::invariant(wad(0)?, &args)?
            },
        };
        Ok(value.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariant::InvariantError;

    #[test]
    fn test_real_interface_rounds_to_wei() {
        let model = FixedPointModel::new();
        assert_eq!(model.name(), "fixed-point");
        assert_eq!(model.ierfc(0.0), 100.0);
        assert_eq!(model.ierfc(2.0), -100.0);
        assert!((model.cdf(0.0) - 0.5).abs() < 1e-7);
        assert_eq!(model.erfc(f64::INFINITY), 0.0);
        assert_eq!(model.erfc(f64::NEG_INFINITY), 2.0);
    }

    #[test]
    fn test_nan_propagates_like_reference() {
        let model = FixedPointModel;
        let kernels: [fn(&FixedPointModel, f64) -> f64; 5] = [
            FixedPointModel::erfc,
            FixedPointModel::ierfc,
            FixedPointModel::cdf,
            FixedPointModel::ppf,
            FixedPointModel::pdf,
        ];
        for kernel in kernels {
            assert!(kernel(&model, f64::NAN).is_nan());
        }
        assert!(crate::gaussian::reference::erfc(f64::NAN).is_nan());
    }

    #[test]
    fn test_invariant_rejects_non_finite_quote() {
        let model = FixedPointModel;
        let args = InvariantArgs::new(0.5, 1.0, 1.0, 1.0);
        assert!(matches!(
            model.invariant(f64::INFINITY, &args),
            Err(InvariantError::Numeric(_))
        ));
    }

    fn words(values: &[i128]) -> Vec<Word> {
        values.iter().copied().map(Word::from_i128).collect()
    }

    #[test]
    fn test_evaluate_uses_words_exactly() {
        let model = FixedPointModel;
        let one = Wad::ONE.raw_value();
        let at_maturity = model
            .evaluate(Operation::GetY, &words(&[one / 2, one, one, 0]))
            .unwrap();
        assert_eq!(at_maturity, 0.5);
    }

    #[test]
    fn test_wide_words_are_out_of_lane() {
        let model = FixedPointModel;
        let one = Wad::ONE.raw_value();
        let year = crate::invariant::YEAR as i128;

        // strike of 2^127 wei: a valid uint256, one past i128::MAX
        let mut row = words(&[308_537_538_726_000_000, one, one, year]);
        row[1] = Word::from_u128(1 << 127);
        assert_eq!(
            model.evaluate(Operation::GetX, &row),
            Err(RowError::OutOfLane {
                operation: Operation::GetX,
                position: 1
            })
        );

        // t beyond i64 seconds
        let mut row = words(&[one / 2, one, one, 0]);
        row[3] = Word::from_u128(u64::MAX as u128);
        assert!(model
            .evaluate(Operation::GetY, &row)
            .is_err_and(|err| err.is_out_of_lane()));

        // the reference lane still reads both rows
        let reference = crate::model::ReferenceModel;
        assert!(reference.evaluate(Operation::GetY, &row).is_ok());
    }

    #[test]
    fn test_evaluate_checks_arity() {
        assert_eq!(
            FixedPointModel.evaluate(Operation::Invariant, &words(&[1, 2])),
            Err(RowError::ArityMismatch {
                operation: Operation::Invariant,
                expected: 5,
                found: 2
            })
        );
    }
}
