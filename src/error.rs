//! Decode errors

use thiserror::Error;

/// Why a piece of text could not be decoded
///
/// Positions index into the input after whitespace has been removed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A code point in the primary group is not a primary alphabet member
    #[error("invalid character {} at position {position}", code_point(.character))]
    InvalidCharacter { character: char, position: usize },

    /// The primary group is not a whole number of triplets
    #[error("invalid encoded length: {count} characters is not a multiple of 3")]
    InvalidLength { count: usize },

    /// A triplet combines to more than 16 bits
    #[error("decoded value {value} exceeds 16-bit range at position {position}")]
    ValueOutOfRange { value: u32, position: usize },

    /// A padding code point does not map to a nibble
    #[error("invalid padding character {} at position {position}", code_point(.character))]
    InvalidPadding { character: char, position: usize },
}

fn code_point(c: &char) -> String {
    format!("U+{:04X}", u32::from(*c))
}
