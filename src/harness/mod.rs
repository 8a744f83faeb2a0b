// ============================================================================
// Harness Module
// Differential verification of the fixed-point lane against the reference
// ============================================================================
//
// This module provides:
// - Sampler: boundary rows plus seeded random rows per operation
// - VectorSet: paired input rows and expected output words
// - codec / ArtifactStore: ABI word arrays as hex text on disk
// - compare / DiffReport: tolerance checks of a lane against a set
// - HarnessConfig / VectorGenerator: the generation and verification driver
//
// Expected outputs always come from the reference lane evaluated on the
// values recovered from the input words, so regenerating a persisted set
// reproduces it exactly. Words stay 256 bits wide end to end; a row the lane
// under test cannot hold is reported as out of lane, not as a mismatch.

mod artifacts;
pub mod codec;
mod compare;
mod config;
mod errors;
mod generator;
mod sampler;
mod vector_set;

pub use artifacts::{encoded_len, ArtifactStore, WrittenArtifact};
pub use compare::{compare, DiffReport, Mismatch};
pub use config::{HarnessConfig, DEFAULT_OUTPUT_DIR, DEFAULT_SEED, DEFAULT_VECTOR_COUNT};
pub use crate::domain::{Operation, Row, Word, WordKind, MAX_ARITY};
pub use errors::{HarnessError, HarnessResult};
pub use generator::{expected_output, VectorGenerator, VectorGeneratorBuilder};
pub use sampler::{
    boundary_rows, Sampler, QUOTE_MODULUS, RESERVE_MODULUS, STRIKE_MODULUS, TIME_MODULUS,
    VOLATILITY_MODULUS,
};
pub use vector_set::VectorSet;
