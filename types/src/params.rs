//! Round parameters, fixed when a sale round is set up.
//!
//! None of these values may change while a round is in progress; a new set of
//! parameters always means a new round.

use serde::{Deserialize, Serialize};

use crate::LaunchError;

/// Configuration of one lottery round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundParams {
    /// Seed for the xoroshiro128** stream that drives winner selection.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Size of the winner reservoir (number of ticket wins handed out).
    #[serde(default = "default_target_total_winners")]
    pub target_total_winners: u32,

    /// Allocation credited per ticket win.
    #[serde(default = "default_base_allocation_unit")]
    pub base_allocation_unit: u64,

    /// Maximum number of lottery tickets a single user may burn.
    #[serde(default = "default_ticket_burn_cap")]
    pub ticket_burn_cap: u64,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_seed() -> u64 {
    76823
}

fn default_target_total_winners() -> u32 {
    250
}

fn default_base_allocation_unit() -> u64 {
    1
}

fn default_ticket_burn_cap() -> u64 {
    10_000
}

// ── Impl ───────────────────────────────────────────────────────────────

impl RoundParams {
    pub fn new(seed: u64, target_total_winners: u32, base_allocation_unit: u64) -> Self {
        Self {
            seed,
            target_total_winners,
            base_allocation_unit,
            ticket_burn_cap: default_ticket_burn_cap(),
        }
    }

    /// Reject parameter sets that would make allocations meaningless.
    pub fn validate(&self) -> Result<(), LaunchError> {
        if self.base_allocation_unit == 0 {
            return Err(LaunchError::InvalidParams(
                "base_allocation_unit must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for RoundParams {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            target_total_winners: default_target_total_winners(),
            base_allocation_unit: default_base_allocation_unit(),
            ticket_burn_cap: default_ticket_burn_cap(),
        }
    }
}
