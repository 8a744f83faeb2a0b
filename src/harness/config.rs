// ============================================================================
// Harness Configuration
// What to generate, how much of it, and where to put it
// ============================================================================

use crate::domain::Operation;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rows per vector set; the arrays are encoded as `int256[129]`
pub const DEFAULT_VECTOR_COUNT: usize = 129;

/// Seed of the committed golden vectors
pub const DEFAULT_SEED: u64 = 0x5eed_0001;

pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Configuration of a vector generation run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HarnessConfig {
    /// Base seed; each operation derives its own stream from it
    pub seed: u64,

    /// Rows per operation, boundary rows included
    pub vector_count: usize,

    /// Operations to generate, in order
    pub operations: Vec<Operation>,

    /// Root directory of the artifacts
    pub output_dir: PathBuf,

    /// Whether the boundary rows lead each set
    pub include_boundaries: bool,
}

impl HarnessConfig {
    /// Create a configuration covering every operation
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            seed: DEFAULT_SEED,
            vector_count: DEFAULT_VECTOR_COUNT,
            operations: Operation::ALL.to_vec(),
            output_dir: output_dir.into(),
            include_boundaries: true,
        }
    }

    /// Builder method: Set the base seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builder method: Set rows per operation
    pub fn with_vector_count(mut self, count: usize) -> Self {
        self.vector_count = count;
        self
    }

    /// Builder method: Restrict the run to `operations`
    pub fn with_operations(mut self, operations: impl IntoIterator<Item = Operation>) -> Self {
        self.operations = operations.into_iter().collect();
        self
    }

    /// Builder method: Set the artifact root
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Builder method: Random rows only
    pub fn without_boundaries(mut self) -> Self {
        self.include_boundaries = false;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.vector_count == 0 {
            return Err("Vector count must be positive".to_string());
        }

        if self.operations.is_empty() {
            return Err("At least one operation is required".to_string());
        }

        for (i, op) in self.operations.iter().enumerate() {
            if self.operations[..i].contains(op) {
                return Err(format!("Operation {} listed twice", op));
            }
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err("Output directory cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl HarnessConfig {
    /// Full golden-vector run
    /// - Every operation, kernels first
    /// - 129 rows each, boundary rows leading
    pub fn reference(output_dir: impl Into<PathBuf>) -> Self {
        Self::new(output_dir)
    }

    /// Normal kernels only (erfc, ierfc, cdf, ppf)
    pub fn kernels_only(output_dir: impl Into<PathBuf>) -> Self {
        Self::new(output_dir).with_operations(Operation::KERNELS)
    }

    /// Trading curve only (getY, getX, invariant)
    pub fn curve_only(output_dir: impl Into<PathBuf>) -> Self {
        Self::new(output_dir).with_operations([
            Operation::GetY,
            Operation::GetX,
            Operation::Invariant,
        ])
    }
}
