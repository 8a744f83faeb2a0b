// ============================================================================
// Domain Module
// Operations, ABI words and row errors shared by every lane and the harness
// ============================================================================
//
// This module provides:
// - Operation: the verified functions, their row layouts and tolerances
// - Word / Row: 256-bit ABI words and the input rows built from them
// - RowError: why a lane produced no value for a row
//
// Nothing here evaluates anything. The models and the harness both build on
// these types, which reach no further than `numeric` and `invariant`.

mod errors;
mod operation;
mod word;

pub use errors::{RowError, RowResult};
pub use operation::{Operation, MAX_ARITY};
pub use word::{Row, Word, WordKind, WORD_BYTES};
