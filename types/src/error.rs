//! Errors for the shared types: identifier parsing and round parameters.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("invalid participant identifier: {0}")]
    InvalidParticipantId(String),

    #[error("invalid round parameters: {0}")]
    InvalidParams(String),

    #[error("config error: {0}")]
    Config(String),
}
