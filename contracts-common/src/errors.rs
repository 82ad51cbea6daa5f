//! Definitions of errors that can occur while encoding contract arguments

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur while encoding values into field elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// A string contains a non-ASCII character
    NonAscii(String),
    /// A string is too long to be packed into a single field element
    StringTooLong {
        /// The length of the string, in bytes
        len: usize,
        /// The maximum length of a short string
        max: usize,
    },
    /// A string is not a valid hexadecimal integer
    Parse(String),
    /// An integer does not fit within the Stark field
    FieldOverflow(String),
}

impl Display for EncodingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EncodingError::NonAscii(s) => write!(f, "string is not ASCII: {:?}", s),
            EncodingError::StringTooLong { len, max } => write!(
                f,
                "string of {} bytes exceeds the short string limit of {} bytes",
                len, max
            ),
            EncodingError::Parse(s) => write!(f, "error parsing hex string: {:?}", s),
            EncodingError::FieldOverflow(s) => write!(f, "value does not fit in a felt: {}", s),
        }
    }
}

impl Error for EncodingError {}
