use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RngError {
    #[error("invalid cap {0}: bounded draws need a cap greater than zero")]
    InvalidCap(u64),
}
