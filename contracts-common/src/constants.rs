//! Constants that parameterize the felt encoding of contract arguments

/// The number of bytes used to represent a Starknet field element
pub const NUM_BYTES_FELT: usize = 32;

/// The maximum number of ASCII bytes that can be packed into a single field element.
///
/// This is one less than [`NUM_BYTES_FELT`], since the Stark prime is just above 2^251.
pub const MAX_SHORT_STRING_LEN: usize = NUM_BYTES_FELT - 1;

/// The number of bits in each limb of a packed 256-bit integer
pub const NUM_BITS_U128: usize = 128;

/// The number of bits in a u64
pub const NUM_BITS_U64: usize = 64;

/// The prefix attached to hexadecimal strings
pub const HEX_PREFIX: &str = "0x";

/// The radix of hexadecimal strings
pub const HEX_RADIX: u32 = 16;
