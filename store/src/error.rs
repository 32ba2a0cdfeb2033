use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("length mismatch: {identifiers} identifiers but {scores} scores")]
    LengthMismatch { identifiers: usize, scores: usize },

    #[error("range [{start}, {end}) is out of bounds for {len} registrants")]
    OutOfRange { start: usize, end: usize, len: usize },
}
