// crates/tu56_core/src/consts.rs

/// Words per block on tape: 128 data words plus one control word.
pub const WORDS_PER_BLOCK: usize = 129;
pub const DATA_WORDS_PER_BLOCK: usize = 128;

/// Encoded label words kept per block; the rest of the data area is zero.
pub const LABEL_WORD_LIMIT: usize = 64;

pub const BLOCKS: usize = 0o100;

pub const BLOCK_BYTES: usize = WORDS_PER_BLOCK * 2;
pub const IMAGE_BYTES: usize = BLOCKS * BLOCK_BYTES;

/// Reserved per-block word (block number / checksum slot), always written as 0.
pub const CONTROL_WORD: u16 = 0;

pub const DEFAULT_IMAGE_NAME: &str = "game.tu56";
pub const PREVIEW_LABELS: usize = 10;

const _: () = {
    assert!(DATA_WORDS_PER_BLOCK + 1 == WORDS_PER_BLOCK);
    assert!(LABEL_WORD_LIMIT <= DATA_WORDS_PER_BLOCK);
    assert!(BLOCK_BYTES == 258);
    assert!(IMAGE_BYTES == 16_512);
};
