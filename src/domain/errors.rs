// ============================================================================
// Row Errors
// ============================================================================

use super::operation::Operation;
use crate::invariant::InvariantError;
use std::fmt;

/// Why a lane produced no value for one vector row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// The row does not have the operation's arity
    ArityMismatch {
        operation: Operation,
        expected: usize,
        found: usize,
    },
    /// A word the lane cannot represent (position within the row)
    OutOfLane {
        operation: Operation,
        position: usize,
    },
    /// The lane rejected the row's arguments
    Invariant(InvariantError),
}

impl RowError {
    pub(crate) const fn arity(operation: Operation, found: usize) -> Self {
        RowError::ArityMismatch {
            operation,
            expected: operation.arity(),
            found,
        }
    }

    /// True when the lane declined the row rather than failing on it
    pub const fn is_out_of_lane(&self) -> bool {
        matches!(self, RowError::OutOfLane { .. })
    }
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::ArityMismatch {
                operation,
                expected,
                found,
            } => write!(
                f,
                "{} takes {} words per row, found {}",
                operation, expected, found
            ),
            RowError::OutOfLane {
                operation,
                position,
            } => write!(
                f,
                "{} word {} does not fit the 128-bit lane",
                operation, position
            ),
            RowError::Invariant(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RowError::Invariant(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InvariantError> for RowError {
    fn from(err: InvariantError) -> Self {
        RowError::Invariant(err)
    }
}

pub type RowResult<T> = Result<T, RowError>;
