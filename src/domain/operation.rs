// ============================================================================
// Operations
// The closed set of functions under differential verification
// ============================================================================

use super::errors::{RowError, RowResult};
use super::word::{Word, WordKind};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Widest row of any operation (`invariant`: y, x, K, o, t)
pub const MAX_ARITY: usize = 5;

/// A function under differential verification
///
/// Row layouts (every word a Wad except `t`, which is whole seconds):
/// - kernels: `[x]`
/// - `GetY`: `[x, K, o, t]`
/// - `GetX`: `[y, K, o, t]`
/// - `Invariant`: `[y, x, K, o, t]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Erfc,
    Ierfc,
    Cdf,
    Ppf,
    GetY,
    GetX,
    Invariant,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::Erfc,
        Operation::Ierfc,
        Operation::Cdf,
        Operation::Ppf,
        Operation::GetY,
        Operation::GetX,
        Operation::Invariant,
    ];

    /// The normal kernels: one signed word in, one word out
    pub const KERNELS: [Operation; 4] = [
        Operation::Erfc,
        Operation::Ierfc,
        Operation::Cdf,
        Operation::Ppf,
    ];

    /// Name used for artifact directories and on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Erfc => "erfc",
            Operation::Ierfc => "ierfc",
            Operation::Cdf => "cdf",
            Operation::Ppf => "ppf",
            Operation::GetY => "getY",
            Operation::GetX => "getX",
            Operation::Invariant => "invariant",
        }
    }

    /// Words per input row
    pub const fn arity(self) -> usize {
        match self {
            Operation::Erfc | Operation::Ierfc | Operation::Cdf | Operation::Ppf => 1,
            Operation::GetY | Operation::GetX => 4,
            Operation::Invariant => 5,
        }
    }

    pub const fn is_kernel(self) -> bool {
        self.arity() == 1
    }

    pub const fn input_kind(self) -> WordKind {
        if self.is_kernel() {
            WordKind::Signed
        } else {
            WordKind::Unsigned
        }
    }

    /// Absolute tolerance before magnitude scaling
    pub const fn tolerance(self) -> f64 {
        match self {
            Operation::Ierfc | Operation::Ppf => 1e-6,
            _ => 1e-7,
        }
    }

    /// Position in [`Operation::ALL`]; mixes into the per-operation seed
    pub(crate) const fn ordinal(self) -> u64 {
        match self {
            Operation::Erfc => 0,
            Operation::Ierfc => 1,
            Operation::Cdf => 2,
            Operation::Ppf => 3,
            Operation::GetY => 4,
            Operation::GetX => 5,
            Operation::Invariant => 6,
        }
    }

    /// Allowed `|actual − expected|` for a row.
    ///
    /// Outputs denominated in the stable asset (`getY`, `invariant`) scale
    /// the tolerance by the largest quote or strike involved. `getX` and the
    /// kernels return values of order one and use it as is.
    pub fn allowed_error(self, row: &[Word], expected: f64) -> f64 {
        let real = |word: &Word| word.to_real(self.input_kind()).abs();
        let magnitude = match (self, row) {
            (Operation::GetY, [_, strike, ..]) => real(strike).max(expected.abs()),
            (Operation::Invariant, [quote, _, strike, ..]) => real(quote).max(real(strike)),
            _ => 1.0,
        };
        self.tolerance() * magnitude.max(1.0)
    }

    /// # Errors
    /// `ArityMismatch` unless `row` is exactly `arity()` words wide.
    pub fn check_arity(self, row: &[Word]) -> RowResult<()> {
        if row.len() == self.arity() {
            Ok(())
        } else {
            Err(RowError::arity(self, row.len()))
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    /// Accepts the artifact name (`getY`) or any case of it (`gety`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown operation: {}", s))
    }
}
