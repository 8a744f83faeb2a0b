// ============================================================================
// Harness Errors
// ============================================================================

use crate::domain::{Operation, RowError};
use crate::invariant::InvariantError;
use crate::numeric::NumericError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while generating, persisting, loading or comparing vectors.
#[derive(Debug)]
pub enum HarnessError {
    /// Artifact could not be read or written
    Io { path: PathBuf, source: io::Error },
    /// The reference lane produced no finite value for a generated row
    UndefinedValue { operation: Operation, index: usize },
    /// A real value could not be scaled to an 18-decimal word
    Encoding(NumericError),
    /// Artifact text is not a valid word array for its operation
    MalformedArtifact { path: PathBuf, reason: String },
    /// Hex text could not be decoded into words
    Decode { offset: usize, reason: &'static str },
    /// Input and output sides disagree on the number of rows
    LengthMismatch { inputs: usize, outputs: usize },
    /// A row does not have the operation's arity
    ArityMismatch {
        operation: Operation,
        expected: usize,
        found: usize,
    },
    /// A row holds a word the lane cannot represent
    OutOfLane { operation: Operation, position: usize },
    /// A lane rejected a row's arguments
    Invariant(InvariantError),
    /// Configuration failed validation
    InvalidConfig(String),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::Io { path, source } => {
                write!(f, "i/o error on {}: {}", path.display(), source)
            },
            HarnessError::UndefinedValue { operation, index } => write!(
                f,
                "reference lane has no finite value for {} row {}",
                operation, index
            ),
            HarnessError::Encoding(err) => write!(f, "cannot encode value: {}", err),
            HarnessError::MalformedArtifact { path, reason } => {
                write!(f, "malformed artifact {}: {}", path.display(), reason)
            },
            HarnessError::Decode { offset, reason } => {
                write!(f, "cannot decode words at byte {}: {}", offset, reason)
            },
            HarnessError::LengthMismatch { inputs, outputs } => write!(
                f,
                "vector set has {} input rows but {} outputs",
                inputs, outputs
            ),
            HarnessError::ArityMismatch {
                operation,
                expected,
                found,
            } => write!(
                f,
                "{} takes {} words per row, found {}",
                operation, expected, found
            ),
            HarnessError::OutOfLane {
                operation,
                position,
            } => write!(
                f,
                "{} word {} does not fit the 128-bit lane",
                operation, position
            ),
            HarnessError::Invariant(err) => write!(f, "{}", err),
            HarnessError::InvalidConfig(reason) => {
                write!(f, "invalid harness configuration: {}", reason)
            },
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HarnessError::Io { source, .. } => Some(source),
            HarnessError::Encoding(err) => Some(err),
            HarnessError::Invariant(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InvariantError> for HarnessError {
    fn from(err: InvariantError) -> Self {
        HarnessError::Invariant(err)
    }
}

impl From<RowError> for HarnessError {
    fn from(err: RowError) -> Self {
        match err {
            RowError::ArityMismatch {
                operation,
                expected,
                found,
            } => HarnessError::ArityMismatch {
                operation,
                expected,
                found,
            },
            RowError::OutOfLane {
                operation,
                position,
            } => HarnessError::OutOfLane {
                operation,
                position,
            },
            RowError::Invariant(err) => HarnessError::Invariant(err),
        }
    }
}

impl From<NumericError> for HarnessError {
    fn from(err: NumericError) -> Self {
        HarnessError::Encoding(err)
    }
}

pub type HarnessResult<T> = Result<T, HarnessError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display() {
        let err = HarnessError::UndefinedValue {
            operation: Operation::GetX,
            index: 7,
        };
        assert_eq!(
            err.to_string(),
            "reference lane has no finite value for getX row 7"
        );

        let err = HarnessError::LengthMismatch {
            inputs: 129,
            outputs: 128,
        };
        assert_eq!(err.to_string(), "vector set has 129 input rows but 128 outputs");
    }

    #[test]
    fn test_source_chain() {
        let err = HarnessError::Io {
            path: PathBuf::from("data/erfc/input"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("data/erfc/input"));

        let err: HarnessError = NumericError::Overflow.into();
        assert!(matches!(err, HarnessError::Encoding(NumericError::Overflow)));
        assert!(err.source().is_some());

        assert!(HarnessError::InvalidConfig("x".into()).source().is_none());
    }

    #[test]
    fn test_row_errors_convert() {
        let err: HarnessError = RowError::OutOfLane {
            operation: Operation::GetY,
            position: 2,
        }
        .into();
        assert!(matches!(
            err,
            HarnessError::OutOfLane {
                operation: Operation::GetY,
                position: 2
            }
        ));
        assert_eq!(err.to_string(), "getY word 2 does not fit the 128-bit lane");

        let err: HarnessError = RowError::arity(Operation::Cdf, 3).into();
        assert!(matches!(
            err,
            HarnessError::ArityMismatch {
                expected: 1,
                found: 3,
                ..
            }
        ));
    }
}
