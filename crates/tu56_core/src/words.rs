//! Label packing: two 8-bit character codes per 16-bit word.
//!
//! Word layout: high byte = earlier character, low byte = later character.
//! Odd-length input is padded with one NUL before pairing. A zero terminator
//! word follows unless the last packed word is already zero.

use crate::errors::{Result, TapeError};

pub type Word = u16;

/// Pack raw character codes into words (NUL-padded, zero-terminated).
pub fn pack_bytes(bytes: &[u8]) -> Vec<Word> {
    let mut out = Vec::with_capacity(bytes.len() / 2 + 2);
    for pair in bytes.chunks(2) {
        let hi = pair[0] as Word;
        let lo = pair.get(1).copied().unwrap_or(0) as Word;
        out.push((hi << 8) | lo);
    }
    if out.last().map_or(true, |&w| w != 0) {
        out.push(0);
    }
    out
}

/// One code per character; anything above U+00FF is rejected.
pub fn label_bytes(label: &str) -> Result<Vec<u8>> {
    label
        .chars()
        .enumerate()
        .map(|(pos, ch)| {
            u8::try_from(u32::from(ch)).map_err(|_| TapeError::InvalidInput {
                label: label.to_string(),
                ch,
                pos,
            })
        })
        .collect()
}

pub fn encode_label(label: &str) -> Result<Vec<Word>> {
    Ok(pack_bytes(&label_bytes(label)?))
}
