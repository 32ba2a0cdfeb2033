//! Batched weighted winner selection.
//!
//! Each registrant visited in store order draws one word `r` from the random
//! source and competes with weight `r * score` for a slot in a reservoir of
//! `target_total_winners`. Only the scan is batched: the reservoir and cursor
//! persist between calls, and the ledger is written once, after the last
//! registrant has been scanned. Issuing the whole range in one call or in any
//! number of contiguous batches yields the same winners for the same seed.

use serde::{Deserialize, Serialize};

use crate::{AllocationLedger, BatchCursor, Candidate, LotteryError, Offer, Reservoir};
use launch_rng::RandomSource;
use launch_store::RegistrantStore;
use launch_types::{Allocation, ParticipantId, RoundParams};

/// What a `select_winners` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchOutcome {
    /// The range was scanned.
    Processed {
        scanned: usize,
        evicted: usize,
        finalized: bool,
    },
    /// The range had been scanned by an earlier call; nothing changed.
    AlreadyProcessed,
}

/// Winner selection state for one round: reservoir, cursor and ledger.
///
/// The random source and registrant store are passed into every call, so the
/// engine holds no hidden global state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerSelectionEngine {
    base_allocation_unit: Allocation,
    reservoir: Reservoir,
    cursor: BatchCursor,
    ledger: AllocationLedger,
    finalized: bool,
}

impl WinnerSelectionEngine {
    pub fn new(target_total_winners: u32, base_allocation_unit: u64) -> Self {
        let target = target_total_winners as usize;
        Self {
            base_allocation_unit: Allocation::from(base_allocation_unit),
            reservoir: Reservoir::new(target),
            cursor: BatchCursor::new(target),
            ledger: AllocationLedger::new(),
            finalized: false,
        }
    }

    pub fn from_params(params: &RoundParams) -> Self {
        Self::new(params.target_total_winners, params.base_allocation_unit)
    }

    /// Scan registrants with index in `[batch_start, batch_end_inclusive]`.
    ///
    /// Batches must be contiguous and in order. A range that lies entirely
    /// behind the cursor is accepted as a no-op so retried calls are harmless.
    /// The call that scans the last registrant also finalizes the ledger.
    pub fn select_winners<S, R>(
        &mut self,
        store: &S,
        rng: &mut R,
        batch_start: usize,
        batch_end_inclusive: usize,
    ) -> Result<BatchOutcome, LotteryError>
    where
        S: RegistrantStore + ?Sized,
        R: RandomSource + ?Sized,
    {
        let len = store.len();
        if batch_start > batch_end_inclusive || batch_end_inclusive >= len {
            return Err(LotteryError::OutOfRange {
                start: batch_start,
                end: batch_end_inclusive,
                len,
            });
        }
        if self.cursor.covers(batch_end_inclusive) {
            tracing::debug!(
                start = batch_start,
                end = batch_end_inclusive,
                "batch already processed, ignoring"
            );
            return Ok(BatchOutcome::AlreadyProcessed);
        }
        if self.finalized {
            return Err(LotteryError::AlreadyFinalized);
        }
        if batch_start != self.cursor.next_start_index {
            tracing::warn!(
                expected = self.cursor.next_start_index,
                got = batch_start,
                "rejecting out-of-order batch"
            );
            return Err(LotteryError::BatchOrderViolation {
                expected: self.cursor.next_start_index,
                got: batch_start,
            });
        }

        let entries = store.range(batch_start, batch_end_inclusive + 1)?;

        let mut evicted = 0;
        for (offset, entry) in entries.iter().enumerate() {
            // (2^64 - 1)^2 < 2^128, so the widened product is exact.
            let weight = rng.next_u64() as u128 * entry.score as u128;
            let candidate = Candidate {
                index: batch_start + offset,
                identifier: entry.identifier,
                weight,
            };
            if let Offer::Evicted(_) = self.reservoir.offer(candidate) {
                evicted += 1;
            }
        }
        self.cursor
            .advance(batch_end_inclusive + 1, self.reservoir.len());

        tracing::debug!(
            start = batch_start,
            end = batch_end_inclusive,
            scanned = entries.len(),
            evicted,
            occupancy = self.reservoir.len(),
            source = rng.name(),
            "batch processed"
        );

        let finalized = if self.cursor.is_complete(len) {
            self.commit_ledger()?;
            true
        } else {
            false
        };

        Ok(BatchOutcome::Processed {
            scanned: entries.len(),
            evicted,
            finalized,
        })
    }

    /// Finalize once every registrant has been scanned.
    ///
    /// Needed only when the last batch did not finalize on its own, which
    /// happens for an empty registrant store. Calling it again is a no-op.
    pub fn finalize<S>(&mut self, store: &S) -> Result<(), LotteryError>
    where
        S: RegistrantStore + ?Sized,
    {
        if self.finalized {
            return Ok(());
        }
        let len = store.len();
        if !self.cursor.is_complete(len) {
            return Err(LotteryError::SelectionIncomplete {
                processed: self.cursor.next_start_index,
                len,
            });
        }
        self.commit_ledger()
    }

    /// Credit one allocation unit per resident ticket. The ledger is built
    /// in full before it replaces the current one.
    fn commit_ledger(&mut self) -> Result<(), LotteryError> {
        let mut ledger = AllocationLedger::new();
        for candidate in self.reservoir.residents() {
            ledger.increment(candidate.identifier, self.base_allocation_unit)?;
        }
        tracing::info!(
            winners = self.reservoir.len(),
            distinct = ledger.len(),
            total_allocation = ledger.total(),
            "winner selection finalized"
        );
        self.ledger = ledger;
        self.finalized = true;
        Ok(())
    }

    /// Allocation for `identifier`; zero until the round is finalized.
    pub fn get_allocation(&self, identifier: &ParticipantId) -> Allocation {
        self.ledger.get(identifier)
    }

    pub fn is_winner(&self, identifier: &ParticipantId) -> bool {
        !self.get_allocation(identifier).is_zero()
    }

    /// One entry per winning ticket, in registration order. Duplicated
    /// identifiers appear once per win. Mid-round this lists the current
    /// leaders.
    pub fn get_winners(&self) -> Vec<ParticipantId> {
        self.reservoir
            .residents()
            .into_iter()
            .map(|c| c.identifier)
            .collect()
    }

    pub fn cursor(&self) -> &BatchCursor {
        &self.cursor
    }

    pub fn reservoir(&self) -> &Reservoir {
        &self.reservoir
    }

    pub fn ledger(&self) -> &AllocationLedger {
        &self.ledger
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Whether any batch has been scanned or the round finalized.
    pub fn has_started(&self) -> bool {
        self.finalized || self.cursor.has_started()
    }

    pub fn target_total_winners(&self) -> usize {
        self.reservoir.capacity()
    }

    pub fn base_allocation_unit(&self) -> Allocation {
        self.base_allocation_unit
    }
}
