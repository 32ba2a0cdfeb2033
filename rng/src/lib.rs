//! Deterministic randomness for winner selection.
//!
//! - [`Xoroshiro128StarStar`]: the seeded, bit-exact stream every draw comes from
//! - [`BoundedDrawSampler`]: draws below a cap, used by the ticket-burn lottery
//!
//! Nothing here is cryptographic. Fairness comes from the seed being fixed
//! before registration closes, not from the generator.

pub mod error;
pub mod sampler;
pub mod xoroshiro;

pub use error::RngError;
pub use sampler::{clamp_burn, BoundedDrawSampler};
pub use xoroshiro::Xoroshiro128StarStar;

/// A stream of pseudo-random 64-bit words.
pub trait RandomSource {
    /// Advance the stream and return the next word.
    fn next_u64(&mut self) -> u64;

    /// Human-readable name of this source.
    fn name(&self) -> &str;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
