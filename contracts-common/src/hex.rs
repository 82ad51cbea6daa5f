//! Conversions between integers, field elements, and `0x`-prefixed hex strings

use num_bigint::BigUint;
use starknet::core::types::FieldElement;

use crate::{
    constants::{HEX_PREFIX, HEX_RADIX},
    errors::EncodingError,
};

/// Formats an integer as a lowercase hex string with a `0x` prefix
pub fn integer_to_hex(value: &BigUint) -> String {
    format!("{:#x}", value)
}

/// Parses a hex string, with or without a `0x` prefix, into an integer
pub fn hex_to_integer(s: &str) -> Result<BigUint, EncodingError> {
    let digits = s
        .strip_prefix(HEX_PREFIX)
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    // `BigUint::parse_bytes` tolerates underscores, so the digits are checked up front
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(EncodingError::Parse(s.to_string()));
    }

    BigUint::parse_bytes(digits.as_bytes(), HEX_RADIX)
        .ok_or_else(|| EncodingError::Parse(s.to_string()))
}

/// Converts a field element into the integer it represents
pub fn felt_to_biguint(felt: &FieldElement) -> BigUint {
    BigUint::from_bytes_be(&felt.to_bytes_be())
}

/// Converts an integer into a field element, failing if it is not below the field modulus
pub fn biguint_to_felt(value: &BigUint) -> Result<FieldElement, EncodingError> {
    FieldElement::from_byte_slice_be(&value.to_bytes_be())
        .map_err(|_| EncodingError::FieldOverflow(integer_to_hex(value)))
}

/// Formats a field element as a lowercase hex string with a `0x` prefix
pub fn felt_to_hex(felt: &FieldElement) -> String {
    integer_to_hex(&felt_to_biguint(felt))
}

/// Parses a hex string into a field element
pub fn hex_to_felt(s: &str) -> Result<FieldElement, EncodingError> {
    biguint_to_felt(&hex_to_integer(s)?)
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use rand::{thread_rng, Rng, RngCore};
    use starknet::core::types::FieldElement;

    use crate::errors::EncodingError;

    use super::{felt_to_hex, hex_to_felt, hex_to_integer, integer_to_hex};

    #[test]
    fn test_parse_prefixed_hex() {
        assert_eq!(hex_to_integer("0x1a").unwrap(), BigUint::from(26_u8));
        assert_eq!(hex_to_integer("0X1A").unwrap(), BigUint::from(26_u8));
        assert_eq!(hex_to_integer("1a").unwrap(), BigUint::from(26_u8));
    }

    #[test]
    fn test_parse_invalid_hex() {
        for s in ["not_hex", "", "0x", "0x1_a", "+0x1a", " 0x1a", "0xg"] {
            assert_eq!(
                hex_to_integer(s),
                Err(EncodingError::Parse(s.to_string())),
                "{s:?} should not parse"
            );
        }
    }

    #[test]
    fn test_zero_to_hex() {
        assert_eq!(integer_to_hex(&BigUint::from(0_u8)), "0x0");
        assert_eq!(integer_to_hex(&BigUint::from(255_u8)), "0xff");
    }

    #[test]
    fn test_hex_round_trip() {
        let mut rng = thread_rng();
        for _ in 0..100 {
            let mut bytes = vec![0_u8; rng.gen_range(0..64)];
            rng.fill_bytes(&mut bytes);
            let value = BigUint::from_bytes_be(&bytes);

            let hex = integer_to_hex(&value);
            assert_eq!(hex_to_integer(&hex).unwrap(), value);
            assert_eq!(integer_to_hex(&hex_to_integer(&hex).unwrap()), hex);
        }
    }

    #[test]
    fn test_felt_hex_round_trip() {
        let felt = FieldElement::from(0x123_u16);
        assert_eq!(felt_to_hex(&felt), "0x123");
        assert_eq!(hex_to_felt("0x123").unwrap(), felt);
    }

    #[test]
    fn test_felt_overflow() {
        // 2^252 is above the Stark prime
        let too_big = format!("0x1{}", "0".repeat(63));
        assert!(matches!(
            hex_to_felt(&too_big),
            Err(EncodingError::FieldOverflow(_))
        ));
    }
}
