//! Tape block layout (LE, 258 bytes):
//!   words[0..128]  = packed label, truncated to 64 words, zero-padded
//!   words[128]     = control word (reserved, always 0)
//!
//! Truncation is on a word boundary. A label long enough to be cut loses its
//! terminator word, but data words 64..128 are always zero so the block still
//! reads as NUL-terminated.

use crate::consts::{
    BLOCK_BYTES, CONTROL_WORD, DATA_WORDS_PER_BLOCK, LABEL_WORD_LIMIT, WORDS_PER_BLOCK,
};
use crate::errors::Result;
use crate::utils::write_words;
use crate::words::{encode_label, Word};
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    words: [Word; WORDS_PER_BLOCK],
}

impl Block {
    pub fn from_label(label: &str) -> Result<Self> {
        let mut encoded = encode_label(label)?;
        if encoded.len() > LABEL_WORD_LIMIT {
            tracing::warn!(label, words = encoded.len(), limit = LABEL_WORD_LIMIT, "label truncated");
            encoded.truncate(LABEL_WORD_LIMIT);
        }
        Ok(Self::from_words(&encoded))
    }

    /// `data` must already fit in the label area.
    fn from_words(data: &[Word]) -> Self {
        let mut words = [0 as Word; WORDS_PER_BLOCK];
        words[..data.len()].copy_from_slice(data);
        words[DATA_WORDS_PER_BLOCK] = CONTROL_WORD;
        Self { words }
    }

    pub fn data(&self) -> &[Word] {
        &self.words[..DATA_WORDS_PER_BLOCK]
    }

    pub fn control(&self) -> Word {
        self.words[DATA_WORDS_PER_BLOCK]
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write_words(w, &self.words)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(BLOCK_BYTES);
        for w in self.words {
            buf.extend_from_slice(&w.to_le_bytes());
        }
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn old_mill_block() {
        let b = Block::from_label("Old Mill").unwrap();
        let expected: [Word; 5] = [0x4F6C, 0x6420, 0x4D69, 0x6C6C, 0];
        assert_eq!(&b.data()[..5], &expected);
        assert!(b.data()[5..].iter().all(|&w| w == 0));
        assert_eq!(b.data().len(), DATA_WORDS_PER_BLOCK);
        assert_eq!(b.control(), 0);
    }

    #[test]
    fn bytes_are_little_endian() {
        let bytes = Block::from_label("AB").unwrap().to_bytes();
        assert_eq!(bytes.len(), BLOCK_BYTES);
        // 'A'<<8 | 'B' = 0x4142 -> 42 41
        assert_eq!(&bytes[..4], &[0x42, 0x41, 0x00, 0x00]);
        assert!(bytes[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn to_bytes_matches_write_to() {
        let b = Block::from_label("Pearl Lagoon").unwrap();
        let mut streamed = Vec::new();
        b.write_to(&mut streamed).unwrap();
        assert_eq!(b.to_bytes(), streamed);
    }

    #[test]
    fn long_label_is_cut_at_word_limit() {
        let label: String = std::iter::repeat("ab").take(100).collect();
        let b = Block::from_label(&label).unwrap();
        assert!(b.data()[..LABEL_WORD_LIMIT].iter().all(|&w| w == 0x6162));
        assert!(b.data()[LABEL_WORD_LIMIT..].iter().all(|&w| w == 0));
        assert_eq!(b.control(), 0);
    }

    #[test]
    fn exactly_limit_sized_encoding_is_kept() {
        // 126 chars -> 63 words + terminator = 64
        let label = "z".repeat(126);
        let b = Block::from_label(&label).unwrap();
        assert_eq!(b.data()[62], 0x7A7A);
        assert_eq!(b.data()[63], 0);
    }

    #[test]
    fn invalid_label_propagates() {
        assert!(Block::from_label("Ж").is_err());
    }
}
