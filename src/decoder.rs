//! Padthai decoder

use crate::alphabet::{classify, nibble, Symbol, BASE};
use crate::error::DecodeError;
use anyhow::{Context, Result};
use std::io::Read;

const TRIPLET_LEN: usize = 3;

/// Decode Thai text back to bytes
///
/// Spaces, tabs and line breaks anywhere in the input are ignored. A final
/// pair of padding characters carries one trailing byte. Decoding is all or
/// nothing: the first problem found is returned and no bytes are produced.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let symbols: Vec<char> = input
        .chars()
        .filter(|&c| classify(c) != Symbol::Whitespace)
        .collect();

    let (primary, padding) = split_padding(&symbols);

    if primary.len() % TRIPLET_LEN != 0 {
        return Err(DecodeError::InvalidLength { count: primary.len() });
    }

    let mut output = Vec::with_capacity(primary.len() / TRIPLET_LEN * 2 + padding.len() / 2);

    for (group, triplet) in primary.chunks_exact(TRIPLET_LEN).enumerate() {
        let start = group * TRIPLET_LEN;
        let value = triplet_value(triplet, start)?;
        let pair = u16::try_from(value)
            .map_err(|_| DecodeError::ValueOutOfRange { value, position: start })?;
        output.extend_from_slice(&pair.to_be_bytes());
    }

    if let [high, low] = padding {
        let start = primary.len();
        let high = padding_nibble(*high, start)?;
        let low = padding_nibble(*low, start + 1)?;
        output.push((high << 4) | low);
    }

    Ok(output)
}

/// Split off a trailing padding pair, if both of the last two characters are padding
fn split_padding(symbols: &[char]) -> (&[char], &[char]) {
    match symbols {
        [.., a, b]
            if matches!(classify(*a), Symbol::Padding(_))
                && matches!(classify(*b), Symbol::Padding(_)) =>
        {
            symbols.split_at(symbols.len() - 2)
        }
        _ => symbols.split_at(symbols.len()),
    }
}

fn triplet_value(triplet: &[char], start: usize) -> Result<u32, DecodeError> {
    triplet.iter().enumerate().try_fold(0u32, |acc, (i, &c)| match classify(c) {
        Symbol::Primary(digit) => Ok(acc * BASE as u32 + u32::from(digit)),
        _ => Err(DecodeError::InvalidCharacter { character: c, position: start + i }),
    })
}

fn padding_nibble(c: char, position: usize) -> Result<u8, DecodeError> {
    nibble(c).ok_or(DecodeError::InvalidPadding { character: c, position })
}

/// Decodes padthai text from strings, readers and files
#[derive(Debug, Clone, Default)]
pub struct Decoder {}

impl Decoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self {}
    }

    /// Decode a string
    pub fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        decode(input)
    }

    /// Read all of `reader` as UTF-8 text and decode it
    pub fn decode_from_reader<R: Read>(&self, mut reader: R) -> Result<Vec<u8>> {
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw).context("Failed to read encoded input")?;
        let text = String::from_utf8(raw).context("Encoded input is not valid UTF-8")?;
        Ok(self.decode(&text)?)
    }

    /// Decode the contents of a file
    pub fn decode_file(&self, path: &std::path::Path) -> Result<Vec<u8>> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        self.decode_from_reader(std::io::BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{PADDING_ALPHABET, PRIMARY_ALPHABET};
    use crate::encoder::encode;

    fn primary(digits: &[usize]) -> String {
        digits.iter().map(|&d| PRIMARY_ALPHABET[d]).collect()
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_whitespace_only() {
        assert_eq!(decode(" \t\r\n").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_two_bytes() {
        assert_eq!(decode("\u{0E01}\u{0E01}\u{0E02}").unwrap(), vec![0x00, 0x01]);
    }

    #[test]
    fn test_decode_with_padding() {
        let text = format!("{}{}{}", primary(&[0, 0, 1]), PADDING_ALPHABET[0], PADDING_ALPHABET[2]);
        assert_eq!(decode(&text).unwrap(), vec![0x00, 0x01, 0x02]);
    }

    #[test]
    fn test_decode_padding_only() {
        assert_eq!(decode("\u{1A0F}\u{1A0F}").unwrap(), vec![0xFF]);
    }

    #[test]
    fn test_round_trip_lengths() {
        for len in 0..64usize {
            let data: Vec<u8> = (0..len).map(|i| (i * 151 + 7) as u8).collect();
            assert_eq!(decode(&encode(&data)).unwrap(), data, "length {}", len);
        }
    }

    #[test]
    fn test_round_trip_every_pair_boundary() {
        for data in [[0x00u8, 0x00], [0x00, 0x01], [0x01, 0x00], [0xFF, 0xFF], [0xDE, 0xAD], [0xBE, 0xEF]] {
            assert_eq!(decode(&encode(&data)).unwrap(), data.to_vec());
        }
    }

    #[test]
    fn test_round_trip_all_bytes() {
        let data: Vec<u8> = (0..=255u8).chain((0..=255u8).rev()).collect();
        assert_eq!(decode(&encode(&data)).unwrap(), data);
        assert_eq!(decode(&encode(&data[1..])).unwrap(), data[1..].to_vec());
    }

    #[test]
    fn test_decode_ignores_whitespace() {
        let data = [0xDEu8, 0xAD, 0xBE, 0xEF, 0x42];
        let encoded = encode(&data);
        let spaced: String = encoded
            .chars()
            .enumerate()
            .flat_map(|(i, c)| {
                let sep = ["", " ", "\n", "\t", "\r\n"][i % 5];
                sep.chars().chain(std::iter::once(c))
            })
            .collect();
        let wrapped = format!("\n{}\n", spaced);
        assert_eq!(decode(&wrapped).unwrap(), decode(&encoded).unwrap());
        assert_eq!(decode(&wrapped).unwrap(), data.to_vec());
    }

    #[test]
    fn test_decode_invalid_character() {
        let err = decode("XYZ").unwrap_err();
        assert_eq!(err, DecodeError::InvalidCharacter { character: 'X', position: 0 });
    }

    #[test]
    fn test_decode_invalid_character_position_skips_whitespace() {
        let text = format!("{} {}\n{}Q{}", primary(&[1]), primary(&[2]), primary(&[3, 4]), primary(&[5]));
        let err = decode(&text).unwrap_err();
        assert_eq!(err, DecodeError::InvalidCharacter { character: 'Q', position: 4 });
    }

    #[test]
    fn test_decode_truncated_triplet() {
        let encoded: String = encode(&[0x42, 0x43]).chars().take(2).collect();
        assert_eq!(decode(&encoded).unwrap_err(), DecodeError::InvalidLength { count: 2 });
    }

    #[test]
    fn test_decode_length_checked_before_characters() {
        assert_eq!(decode("ABCD").unwrap_err(), DecodeError::InvalidLength { count: 4 });
    }

    #[test]
    fn test_decode_single_padding_character() {
        let text = PADDING_ALPHABET[0].to_string();
        assert_eq!(decode(&text).unwrap_err(), DecodeError::InvalidLength { count: 1 });
    }

    #[test]
    fn test_decode_single_trailing_padding_after_triplets() {
        // Lone padding character joins the primary group and breaks its length
        let text = format!("{}{}", primary(&[0, 0, 1]), PADDING_ALPHABET[3]);
        assert_eq!(decode(&text).unwrap_err(), DecodeError::InvalidLength { count: 4 });
    }

    #[test]
    fn test_decode_padding_inside_primary_group() {
        let text = format!("{}{}{}", primary(&[0, 0]), PADDING_ALPHABET[3], primary(&[1, 2, 3]));
        assert_eq!(
            decode(&text).unwrap_err(),
            DecodeError::InvalidCharacter { character: PADDING_ALPHABET[3], position: 2 }
        );
    }

    #[test]
    fn test_decode_padding_run_longer_than_pair() {
        // Only the last two form the pair, the rest land in the primary group
        let text: String = PADDING_ALPHABET[..5].iter().collect();
        assert_eq!(
            decode(&text).unwrap_err(),
            DecodeError::InvalidCharacter { character: PADDING_ALPHABET[0], position: 0 }
        );
    }

    #[test]
    fn test_decode_max_value_in_range() {
        assert_eq!(decode(&primary(&[28, 21, 15])).unwrap(), vec![0xFF, 0xFF]);
    }

    #[test]
    fn test_decode_value_out_of_range() {
        let text = format!("{}{}", primary(&[0, 0, 1]), primary(&[28, 21, 16]));
        assert_eq!(
            decode(&text).unwrap_err(),
            DecodeError::ValueOutOfRange { value: 65536, position: 3 }
        );

        let err = decode(&primary(&[47, 47, 47])).unwrap_err();
        assert_eq!(err, DecodeError::ValueOutOfRange { value: 110591, position: 0 });
    }

    #[test]
    fn test_padding_nibble_rejects_non_padding() {
        assert_eq!(
            padding_nibble('\u{0E01}', 6).unwrap_err(),
            DecodeError::InvalidPadding { character: '\u{0E01}', position: 6 }
        );
        assert_eq!(padding_nibble('\u{1A0C}', 6).unwrap(), 12);
    }

    #[test]
    fn test_decoder_from_reader() {
        let encoded = encode(b"reader input");
        let decoded = Decoder::new().decode_from_reader(encoded.as_bytes()).unwrap();
        assert_eq!(decoded, b"reader input".to_vec());
    }

    #[test]
    fn test_decoder_from_reader_rejects_invalid_utf8() {
        let err = Decoder::new().decode_from_reader(&[0xFFu8, 0xFE][..]).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_decoder_from_reader_keeps_decode_error() {
        let err = Decoder::new().decode_from_reader("XYZ".as_bytes()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DecodeError>(),
            Some(&DecodeError::InvalidCharacter { character: 'X', position: 0 })
        );
    }
}
