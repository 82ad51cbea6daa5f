//! Common types passed as arguments to Starknet contracts

use ruint::aliases::U256;
use starknet::core::types::FieldElement;

use crate::{
    constants::NUM_BITS_U64,
    encoding::{encode_long_string, string_to_felt},
    errors::EncodingError,
};

/// A 256-bit unsigned integer split into its low & high 128-bit limbs,
/// in the layout Cairo uses for `Uint256`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PackedU256 {
    /// The value modulo 2^128
    pub low: u128,
    /// The value divided by 2^128
    pub high: u128,
}

impl PackedU256 {
    /// Splits a 256-bit integer into its low & high limbs
    pub fn split(value: U256) -> Self {
        let [l0, l1, l2, l3] = *value.as_limbs();
        Self {
            low: join_u64s(l0, l1),
            high: join_u64s(l2, l3),
        }
    }

    /// Packs a 128-bit integer, leaving the high limb zero
    pub fn zero_extended(value: u128) -> Self {
        Self {
            low: value,
            high: 0,
        }
    }

    /// Recombines the limbs into the 256-bit integer they represent
    pub fn to_u256(&self) -> U256 {
        U256::from_limbs([
            self.low as u64,
            (self.low >> NUM_BITS_U64) as u64,
            self.high as u64,
            (self.high >> NUM_BITS_U64) as u64,
        ])
    }

    /// The low limb as a field element
    pub fn low_felt(&self) -> FieldElement {
        FieldElement::from(self.low)
    }

    /// The high limb as a field element
    pub fn high_felt(&self) -> FieldElement {
        FieldElement::from(self.high)
    }
}

impl From<U256> for PackedU256 {
    fn from(value: U256) -> Self {
        Self::split(value)
    }
}

/// Joins two little-endian u64 limbs into a u128
fn join_u64s(lo: u64, hi: u64) -> u128 {
    ((hi as u128) << NUM_BITS_U64) | lo as u128
}

/// A string encoded for use as a contract argument
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncodedString {
    /// A short string packed into a single field element
    Short(FieldElement),
    /// A long string split into chunks, each packed into its own field element.
    ///
    /// Serialized as a Cairo array, i.e. prefixed by the number of chunks.
    Chunked(Vec<FieldElement>),
}

impl EncodedString {
    /// Encodes a string of at most 31 ASCII bytes into a single field element
    pub fn short(s: &str) -> Result<Self, EncodingError> {
        string_to_felt(s).map(EncodedString::Short)
    }

    /// Encodes an ASCII string of any length into a sequence of chunk elements
    pub fn chunked(s: &str) -> Result<Self, EncodingError> {
        encode_long_string(s).map(EncodedString::Chunked)
    }

    /// The number of field elements holding the string's contents
    pub fn len(&self) -> usize {
        match self {
            EncodedString::Short(_) => 1,
            EncodedString::Chunked(felts) => felts.len(),
        }
    }

    /// Whether the string is held in zero field elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The field elements holding the string's contents, without a length prefix
    pub fn felts(&self) -> &[FieldElement] {
        match self {
            EncodedString::Short(felt) => std::slice::from_ref(felt),
            EncodedString::Chunked(felts) => felts,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{thread_rng, Rng};
    use ruint::aliases::U256;
    use starknet::core::types::FieldElement;

    use crate::constants::NUM_BITS_U128;

    use super::{EncodedString, PackedU256};

    /// The number of random values to check in property tests
    const NUM_SAMPLES: usize = 1000;

    #[test]
    fn test_split_recombines() {
        let mut rng = thread_rng();
        for _ in 0..NUM_SAMPLES {
            let value = U256::from_limbs(rng.gen::<[u64; 4]>());
            let packed = PackedU256::split(value);

            let low = U256::from_limbs([packed.low as u64, (packed.low >> 64) as u64, 0, 0]);
            let high = U256::from_limbs([packed.high as u64, (packed.high >> 64) as u64, 0, 0]);
            assert_eq!(low + (high << NUM_BITS_U128), value);
            assert_eq!(packed.to_u256(), value);
        }
    }

    #[test]
    fn test_split_boundaries() {
        assert_eq!(PackedU256::split(U256::ZERO), PackedU256 { low: 0, high: 0 });

        let two_pow_128 = U256::from_limbs([0, 0, 1, 0]);
        assert_eq!(PackedU256::split(two_pow_128), PackedU256 { low: 0, high: 1 });
        assert_eq!(
            PackedU256::split(two_pow_128 - U256::from_limbs([1, 0, 0, 0])),
            PackedU256 {
                low: u128::MAX,
                high: 0
            }
        );
        assert_eq!(
            PackedU256::split(U256::MAX),
            PackedU256 {
                low: u128::MAX,
                high: u128::MAX
            }
        );
    }

    #[test]
    fn test_split_small_value() {
        let packed: PackedU256 = U256::from_limbs([555, 0, 0, 0]).into();
        assert_eq!(packed.low_felt(), FieldElement::from(555_u16));
        assert_eq!(packed.high_felt(), FieldElement::ZERO);
    }

    #[test]
    fn test_zero_extended() {
        assert_eq!(PackedU256::zero_extended(5), PackedU256 { low: 5, high: 0 });
        assert_eq!(
            PackedU256::zero_extended(u128::MAX).to_u256(),
            PackedU256::split(U256::from_limbs([u64::MAX, u64::MAX, 0, 0])).to_u256()
        );
    }

    #[test]
    fn test_encoded_string_len() {
        let short = EncodedString::short("MOGP").unwrap();
        assert_eq!(short.len(), 1);
        assert_eq!(short.felts(), &[FieldElement::from(0x4d4f4750_u32)]);

        let chunked = EncodedString::chunked(&"a".repeat(70)).unwrap();
        assert_eq!(chunked.len(), 3);

        let empty = EncodedString::chunked("").unwrap();
        assert!(empty.is_empty());
    }
}
