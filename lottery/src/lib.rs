//! Winner selection for launchpad sale rounds.
//!
//! Every registrant `(id, score)` gets a random weight `next() * score`; the
//! `target_total_winners` heaviest weights win. The scan over the registrant
//! list is split into batches, but the reservoir of leading candidates lives
//! across batches, so the result does not depend on how the list was chunked.
//!
//! This crate handles:
//! - The bounded reservoir of leading candidates
//! - Batch bookkeeping (cursor, idempotent re-submission, ordering checks)
//! - Finalizing the reservoir into a per-participant allocation ledger
//! - A [`SaleRound`] that ties store, random source and engine together

pub mod cursor;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod reservoir;
pub mod round;

pub use cursor::BatchCursor;
pub use engine::{BatchOutcome, WinnerSelectionEngine};
pub use error::LotteryError;
pub use ledger::AllocationLedger;
pub use reservoir::{Candidate, Offer, Reservoir};
pub use round::SaleRound;
