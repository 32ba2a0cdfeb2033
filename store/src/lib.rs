//! Registrant storage for lottery rounds.
//!
//! The selection engine depends only on the [`RegistrantStore`] trait, so a
//! round can be driven from any backend that can serve indexed ranges.

pub mod error;
pub mod memory;
pub mod registrant;

pub use error::StoreError;
pub use memory::MemoryRegistrantStore;
pub use registrant::RegistrantStore;
