// ============================================================================
// Differential Comparison
// Checks a numeric lane against the expected outputs of a vector set
// ============================================================================

use super::vector_set::VectorSet;
use crate::domain::{Operation, RowError, WordKind};
use crate::interfaces::NormalModel;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A row the lane got wrong
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mismatch {
    pub index: usize,
    pub expected: f64,
    /// `None` when the lane failed instead of producing a value
    pub actual: Option<f64>,
    pub allowed: f64,
    /// The lane's error message, if it failed
    pub failure: Option<String>,
}

/// Outcome of comparing one lane on one vector set
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffReport {
    pub operation: Operation,
    pub lane: String,
    pub rows: usize,
    /// Largest `|actual − expected|` over rows the lane evaluated
    pub max_error: f64,
    pub mismatches: Vec<Mismatch>,
    /// Rows the lane declined because a word does not fit its
    /// representation. Not mismatches: the lane never saw them.
    pub out_of_lane: Vec<usize>,
}

impl DiffReport {
    /// True when every row the lane evaluated is within tolerance
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Rows the lane actually evaluated
    pub fn checked(&self) -> usize {
        self.rows - self.out_of_lane.len()
    }

    /// Rows that failed outright, as opposed to drifting out of tolerance
    pub fn failures(&self) -> impl Iterator<Item = &Mismatch> {
        self.mismatches.iter().filter(|m| m.actual.is_none())
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Evaluate every row of `set` with `model` and compare against the
/// recorded outputs within the operation's tolerance.
pub fn compare<M>(set: &VectorSet, model: &M) -> DiffReport
where
    M: NormalModel + ?Sized,
{
    let operation = set.operation();
    let mut max_error: f64 = 0.0;
    let mut mismatches = Vec::new();
    let mut out_of_lane = Vec::new();

    for (index, row, output) in set.iter() {
        let expected = output.to_real(WordKind::Signed);
        let allowed = operation.allowed_error(row, expected);

        match model.evaluate(operation, row) {
            Ok(actual) => {
                let error = (actual - expected).abs();
                // NaN never passes
                if error.is_nan() || error > allowed {
                    mismatches.push(Mismatch {
                        index,
                        expected,
                        actual: Some(actual),
                        allowed,
                        failure: None,
                    });
                }
                if error > max_error {
                    max_error = error;
                }
            },
            Err(RowError::OutOfLane { .. }) => out_of_lane.push(index),
            Err(err) => mismatches.push(Mismatch {
                index,
                expected,
                actual: None,
                allowed,
                failure: Some(err.to_string()),
            }),
        }
    }

    DiffReport {
        operation,
        lane: model.name().to_string(),
        rows: set.len(),
        max_error,
        mismatches,
        out_of_lane,
    }
}
