// ============================================================================
// ABI Word Codec
// Static arrays of 256-bit words as `0x`-prefixed hex text
// ============================================================================
//
// The layout is the Solidity ABI encoding of a static array (`int256[N]`,
// `uint256[k][N]`): no length prefix, one 32-byte big-endian word per
// element, rows concatenated in order. Signed words are two's complement.
// The codec moves bit patterns only; whether a word fits a lane is decided
// when the lane evaluates it.

use super::errors::{HarnessError, HarnessResult};
use crate::domain::{Word, WORD_BYTES};
use std::fmt::Write;

/// Encode words as one `0x…` hex string.
pub fn encode_words(words: &[Word]) -> String {
    let mut text = String::with_capacity(2 + words.len() * WORD_BYTES * 2);
    text.push_str("0x");
    for word in words {
        for byte in word.to_be_bytes() {
            // writing to a String cannot fail
            let _ = write!(text, "{:02x}", byte);
        }
    }
    text
}

/// Decode `0x…` hex text into words.
///
/// Surrounding whitespace is ignored; the `0x` prefix is optional.
///
/// # Errors
/// `Decode` for non-hex text or a partial word.
pub fn decode_words(text: &str) -> HarnessResult<Vec<Word>> {
    let text = text.trim();
    let hex = text.strip_prefix("0x").unwrap_or(text);

    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HarnessError::Decode {
            offset: 0,
            reason: "text is not hexadecimal",
        });
    }
    if hex.len() % (WORD_BYTES * 2) != 0 {
        return Err(HarnessError::Decode {
            offset: hex.len() / 2,
            reason: "length is not a whole number of 32-byte words",
        });
    }

    Ok(hex
        .as_bytes()
        .chunks_exact(WORD_BYTES * 2)
        .map(|digits| {
            let mut bytes = [0u8; WORD_BYTES];
            for (byte, pair) in bytes.iter_mut().zip(digits.chunks_exact(2)) {
                *byte = (nibble(pair[0]) << 4) | nibble(pair[1]);
            }
            Word::from_be_bytes(&bytes)
        })
        .collect())
}

#[inline]
fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WordKind;

    fn words(values: &[i128]) -> Vec<Word> {
        values.iter().copied().map(Word::from_i128).collect()
    }

    #[test]
    fn test_encode_layout() {
        let text = encode_words(&words(&[1, -1]));
        assert_eq!(text.len(), 2 + 2 * 64);
        assert_eq!(&text[..2], "0x");
        assert_eq!(&text[2..66], &format!("{:064x}", 1));
        assert_eq!(&text[66..], "f".repeat(64));
    }

    #[test]
    fn test_encode_one_wad() {
        let text = encode_words(&words(&[1_000_000_000_000_000_000]));
        assert_eq!(
            text,
            "0x0000000000000000000000000000000000000000000000000de0b6b3a7640000"
        );
    }

    #[test]
    fn test_decode_accepts_prefix_variants() {
        let words = words(&[0, 42, -7, i128::MAX, i128::MIN]);
        let text = encode_words(&words);
        assert_eq!(decode_words(&text).unwrap(), words);
        assert_eq!(decode_words(&format!("  {}\n", &text[2..])).unwrap(), words);
        assert_eq!(
            decode_words(&text.to_uppercase().replacen("0X", "0x", 1)).unwrap(),
            words
        );
        assert!(decode_words("0x").unwrap().is_empty());
    }

    #[test]
    fn test_decode_keeps_full_width_words() {
        // 2^128 − 1, the largest reduced quote or strike
        let max_quote = format!("0x{:032x}{:032x}", 0u128, u128::MAX);
        let decoded = decode_words(&max_quote).unwrap();
        assert_eq!(decoded, vec![Word::from_u128(u128::MAX)]);
        assert_eq!(decoded[0].to_i128(WordKind::Unsigned), None);
        assert_eq!(encode_words(&decoded), max_quote);

        // 2^255: sign bit only
        let sign_bit = format!("0x8{}", "0".repeat(63));
        let decoded = decode_words(&sign_bit).unwrap();
        assert!(decoded[0].is_negative());
        assert_eq!(encode_words(&decoded), sign_bit);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_words("0xzz").is_err());
        assert!(matches!(
            decode_words("0x1234"),
            Err(HarnessError::Decode { offset: 2, .. })
        ));
        let partial_second_word = format!("0x{}{}", "0".repeat(64), "1".repeat(62));
        assert!(matches!(
            decode_words(&partial_second_word),
            Err(HarnessError::Decode { offset: 63, .. })
        ));
    }
}
