//! A complete sale round: parameters, registrants, random stream and engine.
//!
//! Lifecycle:
//! 1. Registration: `register_users` / `register_user`, seed updates allowed
//! 2. Selection: contiguous `select_winners` batches (registration closed)
//! 3. Finalized: allocations readable, participation checks enforced
//!
//! The whole round serializes to bytes between batch calls via
//! [`SaleRound::snapshot`] and [`SaleRound::restore`].

use serde::{Deserialize, Serialize};

use crate::{BatchCursor, BatchOutcome, LotteryError, WinnerSelectionEngine};
use launch_rng::{clamp_burn, Xoroshiro128StarStar};
use launch_store::{MemoryRegistrantStore, RegistrantStore};
use launch_types::{Allocation, ParticipantId, RoundParams, Score};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRound {
    params: RoundParams,
    registrants: MemoryRegistrantStore,
    rng: Xoroshiro128StarStar,
    engine: WinnerSelectionEngine,
}

impl SaleRound {
    pub fn new(params: RoundParams) -> Result<Self, LotteryError> {
        params.validate()?;
        tracing::info!(
            seed = params.seed,
            target_total_winners = params.target_total_winners,
            base_allocation_unit = params.base_allocation_unit,
            "sale round created"
        );
        Ok(Self {
            rng: Xoroshiro128StarStar::new(params.seed),
            engine: WinnerSelectionEngine::from_params(&params),
            registrants: MemoryRegistrantStore::new(),
            params,
        })
    }

    /// Start a new round: fresh registrants, fresh ledger, reseeded stream.
    pub fn reset(&mut self, params: RoundParams) -> Result<(), LotteryError> {
        *self = Self::new(params)?;
        Ok(())
    }

    // ── Registration ────────────────────────────────────────────────────

    /// Admin batch push of registrants.
    pub fn register_users(
        &mut self,
        identifiers: &[ParticipantId],
        scores: &[Score],
    ) -> Result<(), LotteryError> {
        if self.engine.has_started() {
            return Err(LotteryError::RegistrationClosed);
        }
        self.registrants.append_batch(identifiers, scores)?;
        Ok(())
    }

    pub fn register_user(&mut self, identifier: ParticipantId, score: Score) -> Result<(), LotteryError> {
        self.register_users(&[identifier], &[score])
    }

    /// Replace the seed before selection begins.
    pub fn update_seed(&mut self, seed: u64) -> Result<(), LotteryError> {
        if self.engine.has_started() {
            return Err(LotteryError::SelectionInProgress);
        }
        self.rng.reseed(seed);
        self.params.seed = seed;
        Ok(())
    }

    // ── Selection ───────────────────────────────────────────────────────

    pub fn select_winners(
        &mut self,
        batch_start: usize,
        batch_end_inclusive: usize,
    ) -> Result<BatchOutcome, LotteryError> {
        self.engine.select_winners(
            &self.registrants,
            &mut self.rng,
            batch_start,
            batch_end_inclusive,
        )
    }

    /// Scan everything left in batches of `batch_size` and finalize.
    /// Returns the number of batches issued.
    pub fn select_all(&mut self, batch_size: usize) -> Result<usize, LotteryError> {
        if batch_size == 0 {
            return Err(LotteryError::InvalidBatchSize);
        }
        let len = self.registrants.len();
        let mut batches = 0;
        let mut start = self.engine.cursor().next_start_index;
        while start < len {
            let end = (start + batch_size).min(len) - 1;
            self.select_winners(start, end)?;
            batches += 1;
            start = end + 1;
        }
        self.finalize()?;
        Ok(batches)
    }

    pub fn finalize(&mut self) -> Result<(), LotteryError> {
        self.engine.finalize(&self.registrants)
    }

    // ── Queries ─────────────────────────────────────────────────────────

    pub fn get_allocation(&self, identifier: &ParticipantId) -> Allocation {
        self.engine.get_allocation(identifier)
    }

    pub fn is_winner(&self, identifier: &ParticipantId) -> bool {
        self.engine.is_winner(identifier)
    }

    pub fn get_winners(&self) -> Vec<ParticipantId> {
        self.engine.get_winners()
    }

    /// Validate a purchase of `amount` against the participant's allocation.
    pub fn check_participation(
        &self,
        identifier: &ParticipantId,
        amount: u128,
    ) -> Result<Allocation, LotteryError> {
        let allowed = self.get_allocation(identifier);
        if allowed.is_zero() {
            return Err(LotteryError::NoAllocation(*identifier));
        }
        if amount > allowed.raw() {
            return Err(LotteryError::ExceedsAllocation {
                requested: amount,
                allowed: allowed.raw(),
            });
        }
        Ok(allowed)
    }

    /// Tickets a user may burn out of `requested` under this round's cap.
    pub fn burnable_tickets(&self, requested: u64) -> u64 {
        clamp_burn(requested, self.params.ticket_burn_cap)
    }

    pub fn registrant_count(&self) -> usize {
        self.registrants.len()
    }

    pub fn registrants(&self) -> &MemoryRegistrantStore {
        &self.registrants
    }

    pub fn cursor(&self) -> &BatchCursor {
        self.engine.cursor()
    }

    pub fn engine(&self) -> &WinnerSelectionEngine {
        &self.engine
    }

    pub fn params(&self) -> &RoundParams {
        &self.params
    }

    pub fn is_finalized(&self) -> bool {
        self.engine.is_finalized()
    }

    // ── Persistence ─────────────────────────────────────────────────────

    pub fn snapshot(&self) -> Result<Vec<u8>, LotteryError> {
        bincode::serialize(self).map_err(|e| LotteryError::Snapshot(e.to_string()))
    }

    pub fn restore(bytes: &[u8]) -> Result<Self, LotteryError> {
        bincode::deserialize(bytes).map_err(|e| LotteryError::Snapshot(e.to_string()))
    }
}
