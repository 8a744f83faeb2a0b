// ============================================================================
// Numeric Errors
// Failures of Wad arithmetic, conversion and the transcendental functions
// ============================================================================

use std::fmt;

/// Why a fixed-point operation produced no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result above the largest representable value
    Overflow,
    /// Result below the smallest representable value
    Underflow,
    DivisionByZero,
    /// Decimal text with more fractional digits than the scale holds
    PrecisionLoss,
    /// Decimal text that does not parse
    InvalidInput,
    /// NaN or an infinity offered as a fixed-point value
    NonFinite,
    /// Argument outside the domain of `function` (`ln` of a non-positive
    /// value, `sqrt` of a negative one)
    OutOfDomain { function: &'static str },
}

impl NumericError {
    /// True for `Overflow` and `Underflow`, the failures a saturating
    /// operation clamps instead of reporting.
    pub const fn is_out_of_range(self) -> bool {
        matches!(self, NumericError::Overflow | NumericError::Underflow)
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => write!(f, "overflow: result above the wad range"),
            NumericError::Underflow => write!(f, "underflow: result below the wad range"),
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::PrecisionLoss => {
                write!(f, "precision loss: more fractional digits than the scale")
            },
            NumericError::InvalidInput => write!(f, "invalid input: not a decimal number"),
            NumericError::NonFinite => write!(f, "non-finite value has no fixed-point form"),
            NumericError::OutOfDomain { function } => {
                write!(f, "argument outside the domain of {}", function)
            },
        }
    }
}

impl std::error::Error for NumericError {}

pub type NumericResult<T> = Result<T, NumericError>;
