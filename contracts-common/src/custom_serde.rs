//! Serialization of contract arguments into flat calldata, i.e. the ordered
//! list of field elements a Starknet entry point receives.
//!
//! Arrays are serialized the way Cairo expects them: the number of elements
//! first, followed by the elements themselves.

use starknet::core::types::FieldElement;

use crate::types::{EncodedString, PackedU256};

/// A trait for serializing types into calldata
pub trait CalldataSerializable {
    /// Serializes a type into a vector of field elements
    fn to_calldata(&self) -> Vec<FieldElement>;
}

impl CalldataSerializable for FieldElement {
    fn to_calldata(&self) -> Vec<FieldElement> {
        vec![*self]
    }
}

impl CalldataSerializable for PackedU256 {
    fn to_calldata(&self) -> Vec<FieldElement> {
        vec![self.low_felt(), self.high_felt()]
    }
}

impl CalldataSerializable for EncodedString {
    fn to_calldata(&self) -> Vec<FieldElement> {
        match self {
            EncodedString::Short(felt) => felt.to_calldata(),
            EncodedString::Chunked(felts) => felts.to_calldata(),
        }
    }
}

impl<T: CalldataSerializable> CalldataSerializable for [T] {
    fn to_calldata(&self) -> Vec<FieldElement> {
        let mut calldata = vec![FieldElement::from(self.len())];
        calldata.extend(self.iter().flat_map(|t| t.to_calldata()));
        calldata
    }
}
