//! Nullable infrastructure for deterministic testing.
//!
//! External inputs to the lottery (here: randomness) are abstracted behind
//! traits. This crate provides test-friendly implementations that:
//! - Return scripted values
//! - Can be inspected after the fact
//!
//! Usage: swap the real random source for a nullable in tests.

pub mod random;

pub use random::NullRandom;
