// ============================================================================
// Invariant Errors
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Errors raised by the trading-curve functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A curve parameter or reserve is outside the function's domain
    DomainViolation {
        parameter: &'static str,
        reason: &'static str,
    },
    /// Fixed-point arithmetic could not represent an intermediate
    Numeric(NumericError),
}

impl InvariantError {
    pub(crate) const fn domain(parameter: &'static str, reason: &'static str) -> Self {
        InvariantError::DomainViolation { parameter, reason }
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::DomainViolation { parameter, reason } => {
                write!(f, "domain violation on `{}`: {}", parameter, reason)
            },
            InvariantError::Numeric(err) => write!(f, "numeric error: {}", err),
        }
    }
}

impl std::error::Error for InvariantError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvariantError::Numeric(err) => Some(err),
            InvariantError::DomainViolation { .. } => None,
        }
    }
}

impl From<NumericError> for InvariantError {
    fn from(err: NumericError) -> Self {
        InvariantError::Numeric(err)
    }
}

pub type InvariantResult<T> = Result<T, InvariantError>;
