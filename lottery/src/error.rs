//! Lottery-specific errors.
//!
//! Every variant is raised before any state is touched; a rejected call
//! leaves the store, random source, reservoir and ledger as they were.

use launch_rng::RngError;
use launch_store::StoreError;
use launch_types::{LaunchError, ParticipantId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LotteryError {
    #[error("batch [{start}, {end}] is out of range for {len} registrants")]
    OutOfRange { start: usize, end: usize, len: usize },

    #[error("batch order violation: expected batch starting at {expected}, got {got}")]
    BatchOrderViolation { expected: usize, got: usize },

    #[error("selection incomplete: {processed} of {len} registrants processed")]
    SelectionIncomplete { processed: usize, len: usize },

    #[error("selection already finalized")]
    AlreadyFinalized,

    #[error("registration is closed once winner selection has started")]
    RegistrationClosed,

    #[error("cannot change the seed while winner selection is in progress")]
    SelectionInProgress,

    #[error("batch size must be non-zero")]
    InvalidBatchSize,

    #[error("participant {0} has no allocation")]
    NoAllocation(ParticipantId),

    #[error("requested {requested} exceeds allocation {allowed}")]
    ExceedsAllocation { requested: u128, allowed: u128 },

    #[error("allocation overflow for participant {0}")]
    AllocationOverflow(ParticipantId),

    #[error("snapshot error: {0}")]
    Snapshot(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("random source error: {0}")]
    Rng(#[from] RngError),

    #[error("round parameters: {0}")]
    Params(#[from] LaunchError),
}
