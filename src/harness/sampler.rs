// ============================================================================
// Input Sampling
// Boundary rows and seeded random rows for each operation
// ============================================================================
//
// Kernel inputs are drawn as reals from the function's natural domain and
// scaled to Wad words. Curve inputs are drawn as random 128-bit integers and
// reduced into range, mirroring how fuzzed on-chain calls arrive: the
// moduli act on raw words, not on reals.

use super::errors::HarnessResult;
use crate::domain::{Operation, Row, Word};
use crate::invariant::YEAR;
use crate::numeric::Wad;
use rand::distributions::Open01;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Quote `y` modulus, 2^128 − 1: half of the reduced quotes exceed i128
pub const QUOTE_MODULUS: u128 = u128::MAX;
pub const STRIKE_MODULUS: u128 = u128::MAX;
/// Volatility `o`, before the `+1` that keeps it positive
pub const VOLATILITY_MODULUS: u128 = (1 << 24) - 1;
/// Time to maturity, in seconds
pub const TIME_MODULUS: u128 = (1 << 32) - 1;
/// Risky reserve `x`: at most one Wad
pub const RESERVE_MODULUS: u128 = 1_000_000_000_000_000_001;

const ONE: i128 = Wad::SCALE;
const HALF: i128 = ONE / 2;
const TWO: i128 = 2 * ONE;
const MINUS_ONE: i128 = -ONE;
const ONE_YEAR: i128 = YEAR as i128;
/// cdf(−0.5): the quote that balances x at 1y, K = 1, o = 1
const BALANCED_QUOTE: i128 = 308_537_538_726_000_000;

/// Mixes the operation into the configured seed (golden-ratio increment)
const SEED_MIX: u64 = 0x9e37_79b9_7f4a_7c15;

/// Rows every vector set starts with, in order.
pub fn boundary_rows(operation: Operation) -> Vec<Row> {
    let rows: &[&[i128]] = match operation {
        Operation::Erfc => &[&[0], &[ONE], &[MINUS_ONE]],
        Operation::Ierfc => &[&[0], &[TWO], &[ONE]],
        Operation::Cdf => &[&[0], &[MINUS_ONE]],
        Operation::Ppf => &[&[0], &[ONE], &[HALF], &[TWO]],
        Operation::GetY => &[&[HALF, ONE, ONE, 0], &[HALF, ONE, ONE, ONE_YEAR]],
        Operation::GetX => &[&[BALANCED_QUOTE, ONE, ONE, ONE_YEAR]],
        Operation::Invariant => &[
            &[BALANCED_QUOTE, BALANCED_QUOTE, ONE, ONE, 0],
            &[BALANCED_QUOTE, BALANCED_QUOTE, ONE, ONE, ONE_YEAR],
        ],
    };
    rows.iter()
        .map(|row| row.iter().copied().map(Word::from_i128).collect())
        .collect()
}

/// Deterministic stream of random rows for one operation.
///
/// The stream depends only on `(seed, operation)`, so one operation can be
/// regenerated without replaying the others.
#[derive(Debug, Clone)]
pub struct Sampler {
    operation: Operation,
    rng: ChaCha8Rng,
}

impl Sampler {
    pub fn new(seed: u64, operation: Operation) -> Self {
        let mixed = seed ^ SEED_MIX.wrapping_mul(operation.ordinal() + 1);
        Self {
            operation,
            rng: ChaCha8Rng::seed_from_u64(mixed),
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Draw the next row.
    ///
    /// # Errors
    /// `Encoding` if a sampled real does not scale to a word (not reachable
    /// for the built-in domains).
    pub fn next_row(&mut self) -> HarnessResult<Row> {
        let mut row = Row::new();
        match self.operation {
            Operation::Erfc | Operation::Cdf => {
                let x = self.rng.gen_range(-4.0..4.0);
                row.push(scale(x)?);
            },
            Operation::Ierfc => {
                let x: f64 = self.rng.sample(Open01);
                row.push(scale(2.0 * x)?);
            },
            Operation::Ppf => {
                let p: f64 = self.rng.sample(Open01);
                row.push(scale(p)?);
            },
            Operation::GetY => {
                row.push(self.reduced(RESERVE_MODULUS));
                self.push_curve(&mut row);
            },
            Operation::GetX => {
                row.push(self.reduced(QUOTE_MODULUS));
                self.push_curve(&mut row);
            },
            Operation::Invariant => {
                row.push(self.reduced(QUOTE_MODULUS));
                row.push(self.reduced(RESERVE_MODULUS));
                self.push_curve(&mut row);
            },
        }
        Ok(row)
    }

    /// Appends `[K, o, t]`.
    fn push_curve(&mut self, row: &mut Row) {
        row.push(self.reduced(STRIKE_MODULUS));
        let sigma = self.rng.gen::<u128>() % VOLATILITY_MODULUS + 1;
        row.push(Word::from_u128(sigma));
        row.push(self.reduced(TIME_MODULUS));
    }

    #[inline]
    fn reduced(&mut self, modulus: u128) -> Word {
        Word::from_u128(self.rng.gen::<u128>() % modulus)
    }
}

impl Iterator for Sampler {
    type Item = HarnessResult<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_row())
    }
}

#[inline]
fn scale(value: f64) -> HarnessResult<Word> {
    Ok(Word::from_real(value)?)
}
