//! Shared utilities for the launchpad lottery.

pub mod logging;

pub use logging::{init_logging, LogFormat};
