//! # padthai
//!
//! Base-48 binary-to-text encoding using Thai characters.
//!
//! ## Format
//!
//! Input is read two bytes at a time. Each pair is a big-endian `u16`, written
//! as three base-48 digits (most significant first) drawn from 48 Thai
//! characters: U+0E01 through U+0E2F, then the baht sign U+0E3F.
//!
//! ```text
//! [0x00, 0x01]  ->  ก ก ข
//! [0xFF, 0xFF]  ->  ฝ ถ ฐ
//! ```
//!
//! If the input length is odd, the last byte is written as two Buginese
//! characters (U+1A00..=U+1A0F), high nibble first:
//!
//! ```text
//! [0x00, 0x01, 0x02]  ->  ก ก ข ᨀ ᨂ
//! ```
//!
//! Two bytes always become three characters and a trailing byte always becomes
//! two, so the output length depends only on the input length.
//!
//! ## Decoding
//!
//! Spaces, tabs, `\n` and `\r` are skipped anywhere in the input, so encoded
//! text can be wrapped freely. Everything else must be a valid triplet or the
//! final padding pair; see [`DecodeError`] for the failure cases.
//!
//! ```
//! let text = padthai::encode(b"hello");
//! assert_eq!(padthai::decode(&text).unwrap(), b"hello");
//! ```

pub mod alphabet;
pub mod decoder;
pub mod encoder;
pub mod error;

pub use alphabet::{classify, Symbol, BASE, PADDING_ALPHABET, PAD_BASE, PRIMARY_ALPHABET};
pub use decoder::{decode, Decoder};
pub use encoder::{encode, encoded_len, Encoder};
pub use error::DecodeError;
