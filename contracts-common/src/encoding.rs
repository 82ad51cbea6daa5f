//! Encoding of ASCII strings into Starknet field elements.
//!
//! A string is packed by reading its ASCII bytes as a big-endian integer, the same
//! way Cairo short strings are represented. Since a field element holds at most
//! 31 such bytes, longer strings are split into chunks which are encoded independently.

use itertools::Itertools;
use starknet::core::{types::FieldElement, utils::cairo_short_string_to_felt};

use crate::{constants::MAX_SHORT_STRING_LEN, errors::EncodingError, hex::felt_to_biguint};

/// Packs a string of at most 31 ASCII bytes into a field element
pub fn string_to_felt(s: &str) -> Result<FieldElement, EncodingError> {
    cairo_short_string_to_felt(s).map_err(|_| {
        if !s.is_ascii() {
            EncodingError::NonAscii(s.to_string())
        } else {
            EncodingError::StringTooLong {
                len: s.len(),
                max: MAX_SHORT_STRING_LEN,
            }
        }
    })
}

/// Splits an ASCII string into chunks short enough to be packed into a single field element.
///
/// Every chunk but the last is exactly 31 bytes long. The empty string yields no chunks.
pub fn split_long_string(s: &str) -> Result<Vec<&str>, EncodingError> {
    if !s.is_ascii() {
        return Err(EncodingError::NonAscii(s.to_string()));
    }

    // ASCII characters are single bytes, so every byte index is a char boundary
    Ok((0..s.len())
        .step_by(MAX_SHORT_STRING_LEN)
        .map(|start| &s[start..(start + MAX_SHORT_STRING_LEN).min(s.len())])
        .collect())
}

/// Encodes each chunk of a pre-split string, preserving order
pub fn encode_string_sequence<S: AsRef<str>>(
    chunks: &[S],
) -> Result<Vec<FieldElement>, EncodingError> {
    chunks
        .iter()
        .map(|chunk| string_to_felt(chunk.as_ref()))
        .collect()
}

/// Splits an ASCII string of any length into chunks & encodes each of them
pub fn encode_long_string(s: &str) -> Result<Vec<FieldElement>, EncodingError> {
    encode_string_sequence(&split_long_string(s)?)
}

/// Encodes each chunk of a pre-split string and renders the resulting
/// integers in decimal, separated by single spaces
pub fn format_string_sequence_for_display<S: AsRef<str>>(
    chunks: &[S],
) -> Result<String, EncodingError> {
    Ok(encode_string_sequence(chunks)?
        .iter()
        .map(|felt| felt_to_biguint(felt).to_string())
        .join(" "))
}

#[cfg(test)]
mod tests {
    use rand::{distributions::Alphanumeric, thread_rng, Rng};
    use starknet::core::types::FieldElement;

    use crate::{constants::MAX_SHORT_STRING_LEN, errors::EncodingError};

    use super::{
        encode_long_string, encode_string_sequence, format_string_sequence_for_display,
        split_long_string, string_to_felt,
    };

    #[test]
    fn test_single_char() {
        assert_eq!(string_to_felt("A").unwrap(), FieldElement::from(65_u8));
    }

    #[test]
    fn test_two_chars_big_endian() {
        assert_eq!(string_to_felt("AB").unwrap(), FieldElement::from(16706_u16));
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(string_to_felt("").unwrap(), FieldElement::ZERO);
    }

    #[test]
    fn test_max_len_string() {
        let s = "z".repeat(MAX_SHORT_STRING_LEN);
        let felt = string_to_felt(&s).unwrap();

        let mut expected = [0_u8; 32];
        expected[1..].copy_from_slice(s.as_bytes());
        assert_eq!(felt.to_bytes_be(), expected);
    }

    #[test]
    fn test_too_long_string() {
        let s = "z".repeat(MAX_SHORT_STRING_LEN + 1);
        assert_eq!(
            string_to_felt(&s),
            Err(EncodingError::StringTooLong {
                len: MAX_SHORT_STRING_LEN + 1,
                max: MAX_SHORT_STRING_LEN,
            })
        );
    }

    #[test]
    fn test_non_ascii_string() {
        assert_eq!(
            string_to_felt("café"),
            Err(EncodingError::NonAscii("café".to_string()))
        );
        assert!(split_long_string("café").is_err());
    }

    #[test]
    fn test_sequence_preserves_order() {
        assert_eq!(
            encode_string_sequence(&["A", "B"]).unwrap(),
            vec![FieldElement::from(65_u8), FieldElement::from(66_u8)]
        );
    }

    #[test]
    fn test_sequence_fails_on_bad_chunk() {
        let chunks = vec!["ok".to_string(), "z".repeat(MAX_SHORT_STRING_LEN + 1)];
        assert!(encode_string_sequence(&chunks).is_err());
    }

    #[test]
    fn test_split_long_string() {
        let mut rng = thread_rng();
        for len in [0, 1, 30, 31, 32, 62, 63, 100] {
            let s: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect();

            let chunks = split_long_string(&s).unwrap();
            assert_eq!(chunks.len(), (len + MAX_SHORT_STRING_LEN - 1) / MAX_SHORT_STRING_LEN);
            assert!(chunks.iter().all(|c| c.len() <= MAX_SHORT_STRING_LEN));
            assert_eq!(chunks.concat(), s);
        }
    }

    #[test]
    fn test_encode_long_uri() {
        let uri = "https://gateway.pinata.cloud/ipfs/QmNNhGMNGppvMhZ438m51qSJ5g6Q7kmXiFcbtnda6t3khh/";
        let expected = encode_string_sequence(&[
            "https://gateway.pinata.cloud/ip",
            "fs/QmNNhGMNGppvMhZ438m51qSJ5g6Q",
            "7kmXiFcbtnda6t3khh/",
        ])
        .unwrap();

        assert_eq!(encode_long_string(uri).unwrap(), expected);
    }

    #[test]
    fn test_display_format() {
        assert_eq!(
            format_string_sequence_for_display(&["A", "B"]).unwrap(),
            "65 66"
        );
        assert_eq!(
            format_string_sequence_for_display(&["AB"]).unwrap(),
            "16706"
        );
        assert_eq!(
            format_string_sequence_for_display::<&str>(&[]).unwrap(),
            ""
        );
    }
}
