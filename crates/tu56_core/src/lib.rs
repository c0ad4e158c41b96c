pub mod consts;
pub mod errors;
pub mod utils;
pub mod words;
pub mod labels;
pub mod block;
pub mod image;

pub use block::Block;
pub use errors::{Result, TapeError};
pub use image::{write_image, ImageReport, ImageWriter};
pub use labels::{LabelTable, PLACES};
pub use words::{encode_label, pack_bytes, Word};
