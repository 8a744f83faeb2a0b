// ============================================================================
// Vector Sets
// Paired input rows and expected output words for one operation
// ============================================================================

use super::errors::{HarnessError, HarnessResult};
use crate::domain::{Operation, Row, Word};

/// Golden vectors for one operation. Row `i` of `inputs` produced
/// `outputs[i]`; order is insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorSet {
    operation: Operation,
    inputs: Vec<Row>,
    outputs: Vec<Word>,
}

impl VectorSet {
    /// # Errors
    /// `LengthMismatch` if the sides differ in length, `ArityMismatch` if a
    /// row is not `operation.arity()` words wide.
    pub fn new(operation: Operation, inputs: Vec<Row>, outputs: Vec<Word>) -> HarnessResult<Self> {
        if inputs.len() != outputs.len() {
            return Err(HarnessError::LengthMismatch {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        if let Some(row) = inputs.iter().find(|row| row.len() != operation.arity()) {
            operation.check_arity(row)?;
        }
        Ok(Self {
            operation,
            inputs,
            outputs,
        })
    }

    /// Rebuild a set from flat word arrays as stored on disk.
    ///
    /// # Errors
    /// `ArityMismatch` if the input words do not split into whole rows,
    /// `LengthMismatch` if the row count differs from the output count.
    pub fn from_words(
        operation: Operation,
        input_words: &[Word],
        outputs: Vec<Word>,
    ) -> HarnessResult<Self> {
        let arity = operation.arity();
        if input_words.len() % arity != 0 {
            return Err(HarnessError::ArityMismatch {
                operation,
                expected: arity,
                found: input_words.len() % arity,
            });
        }
        let inputs = input_words
            .chunks_exact(arity)
            .map(|chunk| chunk.iter().copied().collect())
            .collect();
        Self::new(operation, inputs, outputs)
    }

    #[inline]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    #[inline]
    pub fn inputs(&self) -> &[Row] {
        &self.inputs
    }

    #[inline]
    pub fn outputs(&self) -> &[Word] {
        &self.outputs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// Rows flattened in row-major order, as encoded on disk
    pub fn input_words(&self) -> Vec<Word> {
        self.inputs.iter().flatten().copied().collect()
    }

    /// `(index, row, expected output)` triples in order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Row, Word)> + '_ {
        self.inputs
            .iter()
            .zip(self.outputs.iter().copied())
            .enumerate()
            .map(|(i, (row, output))| (i, row, output))
    }
}
