//! Fundamental types for the launchpad lottery.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! participant identifiers, registrant entries, allocation amounts and the
//! per-round parameters.

pub mod amount;
pub mod error;
pub mod params;
pub mod participant;

pub use amount::Allocation;
pub use error::LaunchError;
pub use params::RoundParams;
pub use participant::{ParticipantId, Registrant, Score};
