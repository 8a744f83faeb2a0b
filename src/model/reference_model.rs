// ============================================================================
// Reference Model
// The binary64 lane behind the NormalModel interface
// ============================================================================

use crate::gaussian::reference as kernels;
use crate::interfaces::NormalModel;
use crate::invariant::{reference as curve, Curve, InvariantArgs, InvariantResult};

/// Binary64 lane. Produces the expected outputs of every vector set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceModel;

impl ReferenceModel {
    pub fn new() -> Self {
        Self
    }
}

impl NormalModel for ReferenceModel {
    fn name(&self) -> &str {
        "reference"
    }

    #[inline]
    fn erfc(&self, x: f64) -> f64 {
        kernels::erfc(x)
    }

    #[inline]
    fn ierfc(&self, x: f64) -> f64 {
        kernels::ierfc(x)
    }

    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        kernels::cdf(x)
    }

    #[inline]
    fn ppf(&self, p: f64) -> f64 {
        kernels::ppf(p)
    }

    #[inline]
    fn pdf(&self, x: f64) -> f64 {
        kernels::pdf(x)
    }

    fn get_y(&self, args: &InvariantArgs) -> InvariantResult<f64> {
        curve::get_y(args)
    }

    fn get_x(&self, y: f64, curve: &Curve) -> InvariantResult<f64> {
        curve::get_x(y, curve)
    }

    fn invariant(&self, y: f64, args: &InvariantArgs) -> InvariantResult<f64> {
        curve::invariant(y, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Operation, RowError, Word};
    use crate::invariant::YEAR;

    #[test]
    fn test_delegates_to_kernels() {
        let model = ReferenceModel::new();
        assert_eq!(model.name(), "reference");
        assert_eq!(model.erfc(0.4), kernels::erfc(0.4));
        assert_eq!(model.ierfc(2.0), -100.0);
        assert_eq!(model.ppf(0.3), kernels::ppf(0.3));
    }

    #[test]
    fn test_evaluate_decodes_words() {
        let model = ReferenceModel;
        let half = Word::from_i128(500_000_000_000_000_000);
        let one = Word::from_i128(1_000_000_000_000_000_000);
        let year = Word::from_i128(YEAR as i128);

        let y = model.evaluate(Operation::GetY, &[half, one, one, year]).unwrap();
        assert_eq!(y, kernels::cdf(kernels::ppf(0.5) - 1.0));

        let minus_one = Word::from_i128(-1_000_000_000_000_000_000);
        let erfc = model.evaluate(Operation::Erfc, &[minus_one]).unwrap();
        assert_eq!(erfc, kernels::erfc(-1.0));
    }

    #[test]
    fn test_evaluate_reads_full_width_words() {
        // K = 2^128 − 2 wei, past the 128-bit signed lane
        let strike = Word::from_u128(u128::MAX - 1);
        let quote = Word::from_u128(u128::MAX / 2);
        let row = [quote, strike, Word::from_i128(1), Word::from_i128(YEAR as i128)];

        let x = ReferenceModel.evaluate(Operation::GetX, &row).unwrap();
        assert!((0.0..=1.0).contains(&x));
        assert_eq!(
            ReferenceModel.evaluate(Operation::Cdf, &row),
            Err(RowError::ArityMismatch {
                operation: Operation::Cdf,
                expected: 1,
                found: 4
            })
        );
    }
}
