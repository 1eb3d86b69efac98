use thiserror::Error;

#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Invalid grid dimensions: width={0}, height={1} (minimum is 3x3)")]
    InvalidDimensions(usize, usize),

    #[error("Non-rectangular pixel grid: row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Pixel buffer length mismatch: expected {expected} pixels, found {found}")]
    PixelCountMismatch { expected: usize, found: usize },

    #[error("Cannot rank against an empty candidate set")]
    EmptyCandidateSet,

    #[error("Failed to read feature store: {0}")]
    StoreReadError(String),

    #[error("Failed to write feature store: {0}")]
    StoreWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RetrievalError>;
