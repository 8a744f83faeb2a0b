// ============================================================================
// ABI Words
// 256-bit two's-complement words as they cross the vector boundary
// ============================================================================

use super::operation::MAX_ARITY;
use crate::numeric::{scale_f64, NumericError, NumericResult, Wad};
use arrayvec::ArrayVec;
use primitive_types::U256;
use std::fmt;

/// Bytes per ABI word
pub const WORD_BYTES: usize = 32;

/// ABI type a word is read as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordKind {
    /// `int256`, two's complement
    Signed,
    /// `uint256`, non-negative
    Unsigned,
}

/// One `int256`/`uint256` word of a vector row or output.
///
/// A word is a bit pattern; [`WordKind`] decides how it reads. Values are
/// kept at full width so artifacts round-trip whatever a lane can hold.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Word(U256);

/// One input row: `operation.arity()` words, stored inline.
pub type Row = ArrayVec<Word, MAX_ARITY>;

impl Word {
    #[inline]
    pub fn from_u128(value: u128) -> Self {
        Self(U256::from(value))
    }

    #[inline]
    pub fn from_i128(value: i128) -> Self {
        if value < 0 {
            // -m = !(m - 1)
            Self(!U256::from(value.unsigned_abs() - 1))
        } else {
            Self(U256::from(value as u128))
        }
    }

    #[inline]
    pub fn from_wad(value: Wad) -> Self {
        Self::from_i128(value.raw_value())
    }

    /// 18-decimal word of a real, rounded half away from zero from its
    /// shortest decimal form.
    ///
    /// # Errors
    /// `NonFinite` for NaN or infinities, `Overflow`/`Underflow` beyond the
    /// `int256` range.
    pub fn from_real(value: f64) -> NumericResult<Self> {
        let (negative, magnitude) = scale_f64(value, Wad::DECIMALS)?;
        let half = U256::one() << 255u32;
        if magnitude.is_zero() {
            Ok(Self(U256::zero()))
        } else if negative {
            if magnitude > half {
                return Err(NumericError::Underflow);
            }
            Ok(Self(!(magnitude - U256::one())))
        } else {
            if magnitude >= half {
                return Err(NumericError::Overflow);
            }
            Ok(Self(magnitude))
        }
    }

    #[inline]
    pub fn from_be_bytes(bytes: &[u8; WORD_BYTES]) -> Self {
        Self(U256::from_big_endian(bytes))
    }

    #[inline]
    pub fn to_be_bytes(self) -> [u8; WORD_BYTES] {
        let mut bytes = [0u8; WORD_BYTES];
        self.0.to_big_endian(&mut bytes);
        bytes
    }

    /// Sign bit set, i.e. negative when read as `int256`
    #[inline]
    pub fn is_negative(self) -> bool {
        self.0.bit(255)
    }

    /// Sign and magnitude of the word read as `kind`
    fn split(self, kind: WordKind) -> (bool, U256) {
        if kind == WordKind::Signed && self.is_negative() {
            // cannot overflow: a negative word is never zero
            (true, !self.0 + U256::one())
        } else {
            (false, self.0)
        }
    }

    /// The word as an i128, if it fits.
    pub fn to_i128(self, kind: WordKind) -> Option<i128> {
        let (negative, magnitude) = self.split(kind);
        let limit = if negative {
            U256::from(1u128 << 127)
        } else {
            U256::from(i128::MAX as u128)
        };
        if magnitude > limit {
            return None;
        }
        let magnitude = magnitude.low_u128() as i128;
        Some(if negative {
            magnitude.wrapping_neg()
        } else {
            magnitude
        })
    }

    /// The word as a Wad, if it fits the i128 lane.
    #[inline]
    pub fn to_wad(self, kind: WordKind) -> Option<Wad> {
        self.to_i128(kind).map(Wad::from_raw)
    }

    /// Nearest float to the integer the word holds.
    pub fn to_f64(self, kind: WordKind) -> f64 {
        let (negative, magnitude) = self.split(kind);
        let value = if magnitude.bits() <= 128 {
            magnitude.low_u128() as f64
        } else {
            magnitude
                .0
                .iter()
                .rev()
                .fold(0.0, |acc, &limb| acc * 18_446_744_073_709_551_616.0 + limb as f64)
        };
        if negative {
            -value
        } else {
            value
        }
    }

    /// The word read as an 18-decimal real
    #[inline]
    pub fn to_real(self, kind: WordKind) -> f64 {
        self.to_f64(kind) / Wad::SCALE as f64
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_i128(WordKind::Signed) {
            Some(value) => write!(f, "Word({})", value),
            None => write!(f, "Word({:#x})", self.0),
        }
    }
}

impl From<i128> for Word {
    fn from(value: i128) -> Self {
        Self::from_i128(value)
    }
}
