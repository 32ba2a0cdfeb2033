//! Per-participant allocation record for a round.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::LotteryError;
use launch_types::{Allocation, ParticipantId};

/// Authoritative allocation per participant.
///
/// Entries are created on first win and only ever grow within a round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationLedger {
    entries: BTreeMap<ParticipantId, Allocation>,
}

impl AllocationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the participant's allocation, creating the entry if absent.
    pub fn increment(
        &mut self,
        identifier: ParticipantId,
        amount: Allocation,
    ) -> Result<Allocation, LotteryError> {
        let current = self.get(&identifier);
        let updated = current
            .checked_add(amount)
            .ok_or(LotteryError::AllocationOverflow(identifier))?;
        self.entries.insert(identifier, updated);
        Ok(updated)
    }

    /// Current allocation, zero when absent.
    pub fn get(&self, identifier: &ParticipantId) -> Allocation {
        self.entries
            .get(identifier)
            .copied()
            .unwrap_or(Allocation::ZERO)
    }

    /// Drop every entry. Only for the start of a new round.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Number of distinct participants holding an allocation.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&ParticipantId, &Allocation)> {
        self.entries.iter()
    }

    /// Sum of every allocation.
    pub fn total(&self) -> u128 {
        self.entries.values().map(|a| a.raw()).sum()
    }
}
