//! Fixed character sets used by the codec
//!
//! The primary alphabet holds 48 Thai characters (U+0E01..=U+0E2F followed by
//! the baht sign U+0E3F). Each one is a base-48 digit. The padding alphabet is
//! the Buginese block U+1A00..=U+1A0F, one character per nibble, and only ever
//! appears as the final pair of an encoding of odd-length input.

/// Radix of the primary encoding
pub const BASE: usize = 48;

/// Number of padding characters (one per nibble value)
pub const PAD_BASE: usize = 16;

const THAI_START: u32 = 0x0E01;
const THAI_END: u32 = 0x0E2F;
const THAI_BAHT: u32 = 0x0E3F;

const BUGINESE_START: u32 = 0x1A00;
const BUGINESE_END: u32 = 0x1A0F;

// Reverse lookup window: THAI_START..=THAI_BAHT
const INDEX_LEN: usize = (THAI_BAHT - THAI_START + 1) as usize;
const NO_DIGIT: u8 = u8::MAX;

/// Ordered primary alphabet, indexed by digit value
pub const PRIMARY_ALPHABET: [char; BASE] = build_primary();

/// Ordered padding alphabet, indexed by nibble value
pub const PADDING_ALPHABET: [char; PAD_BASE] = build_padding();

const PRIMARY_INDEX: [u8; INDEX_LEN] = build_index();

const fn to_char(code: u32) -> char {
    match char::from_u32(code) {
        Some(c) => c,
        None => panic!("alphabet code point is not a scalar value"),
    }
}

const fn build_primary() -> [char; BASE] {
    let mut table = ['\0'; BASE];
    let mut i = 0;
    while i < (THAI_END - THAI_START + 1) as usize {
        table[i] = to_char(THAI_START + i as u32);
        i += 1;
    }
    table[i] = to_char(THAI_BAHT);
    table
}

const fn build_padding() -> [char; PAD_BASE] {
    let mut table = ['\0'; PAD_BASE];
    let mut i = 0;
    while i < PAD_BASE {
        table[i] = to_char(BUGINESE_START + i as u32);
        i += 1;
    }
    table
}

const fn build_index() -> [u8; INDEX_LEN] {
    let primary = build_primary();
    let mut index = [NO_DIGIT; INDEX_LEN];
    let mut digit = 0;
    while digit < BASE {
        index[(primary[digit] as u32 - THAI_START) as usize] = digit as u8;
        digit += 1;
    }
    index
}

/// What a single code point means to the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Primary alphabet member with its digit value (0-47)
    Primary(u8),
    /// Padding alphabet member with its nibble value (0-15)
    Padding(u8),
    /// Space, tab, `\n` or `\r`; carries no data
    Whitespace,
    /// Anything else
    Invalid,
}

/// Classify a code point
pub fn classify(c: char) -> Symbol {
    if matches!(c, ' ' | '\t' | '\n' | '\r') {
        return Symbol::Whitespace;
    }
    if let Some(nibble) = nibble(c) {
        return Symbol::Padding(nibble);
    }
    match digit(c) {
        Some(digit) => Symbol::Primary(digit),
        None => Symbol::Invalid,
    }
}

/// Digit value of a primary alphabet member
pub fn digit(c: char) -> Option<u8> {
    let offset = (c as u32).checked_sub(THAI_START)?;
    match PRIMARY_INDEX.get(offset as usize) {
        Some(&d) if d != NO_DIGIT => Some(d),
        _ => None,
    }
}

/// Nibble value of a padding alphabet member
pub fn nibble(c: char) -> Option<u8> {
    let code = c as u32;
    if (BUGINESE_START..=BUGINESE_END).contains(&code) {
        Some((code - BUGINESE_START) as u8)
    } else {
        None
    }
}

/// Primary character for a digit
///
/// # Panics
///
/// Panics if `digit >= 48`.
pub fn primary_char(digit: u8) -> char {
    PRIMARY_ALPHABET[usize::from(digit)]
}

/// Padding character for a nibble
///
/// # Panics
///
/// Panics if `nibble >= 16`.
pub fn padding_char(nibble: u8) -> char {
    PADDING_ALPHABET[usize::from(nibble)]
}
