//! Padthai encoder

use crate::alphabet::{padding_char, primary_char, BASE};
use anyhow::{Context, Result};

/// Characters produced per pair of input bytes
const PAIR_CHARS: usize = 3;

/// Characters produced for a trailing odd byte
const TAIL_CHARS: usize = 2;

/// Encode bytes to Thai text
///
/// Every two bytes are read as a big-endian `u16` and written as three base-48
/// digits, most significant first. A trailing odd byte becomes two padding
/// characters, high nibble first.
pub fn encode(data: &[u8]) -> String {
    // Every alphabet member is 3 bytes in UTF-8
    let mut output = String::with_capacity(encoded_len(data.len()) * 3);

    let mut pairs = data.chunks_exact(2);
    for pair in &mut pairs {
        let mut value = usize::from(u16::from_be_bytes([pair[0], pair[1]]));

        let mut digits = [0u8; PAIR_CHARS];
        for digit in digits.iter_mut().rev() {
            *digit = (value % BASE) as u8;
            value /= BASE;
        }

        for digit in digits {
            output.push(primary_char(digit));
        }
    }

    if let [last] = pairs.remainder() {
        output.push(padding_char(last >> 4));
        output.push(padding_char(last & 0x0F));
    }

    output
}

/// Number of characters `encode` produces for `len` input bytes
pub fn encoded_len(len: usize) -> usize {
    (len / 2) * PAIR_CHARS + (len % 2) * TAIL_CHARS
}

/// Encodes bytes with optional line wrapping
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    /// Characters per line, 0 disables wrapping
    wrap: usize,
}

impl Encoder {
    /// Create a new encoder
    pub fn new() -> Self {
        Self { wrap: 0 }
    }

    /// Break output into lines of `width` characters
    pub fn with_wrap(mut self, width: usize) -> Self {
        self.wrap = width;
        self
    }

    /// Encode bytes to a string
    pub fn encode(&self, data: &[u8]) -> String {
        let encoded = encode(data);
        if self.wrap == 0 {
            return encoded;
        }
        self.wrap_lines(&encoded)
    }

    fn wrap_lines(&self, encoded: &str) -> String {
        let mut output = String::with_capacity(encoded.len() + encoded.len() / self.wrap + 1);
        for (i, c) in encoded.chars().enumerate() {
            if i > 0 && i % self.wrap == 0 {
                output.push('\n');
            }
            output.push(c);
        }
        output
    }

    /// Encode bytes directly to a writer
    pub fn encode_to_writer<W: std::io::Write>(&self, data: &[u8], mut writer: W) -> Result<()> {
        let encoded = self.encode(data);
        writer.write_all(encoded.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Encode bytes to a file
    pub fn encode_to_file(&self, data: &[u8], path: &std::path::Path) -> Result<()> {
        let encoded = self.encode(data);
        std::fs::write(path, encoded)
            .with_context(|| format!("Failed to write: {}", path.display()))?;
        Ok(())
    }
}
