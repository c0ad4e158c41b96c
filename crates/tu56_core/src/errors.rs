use thiserror::Error;

#[derive(Debug, Error)]
pub enum TapeError {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Persist: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("label {label:?}: character {ch:?} at position {pos} does not fit in one byte")]
    InvalidInput { label: String, ch: char, pos: usize },

    #[error("image needs {expected} blocks, {written} written")]
    BlockCount { expected: usize, written: usize },
}

pub type Result<T> = std::result::Result<T, TapeError>;
