//! Vector-backed registrant store.

use serde::{Deserialize, Serialize};

use crate::{RegistrantStore, StoreError};
use launch_types::{ParticipantId, Registrant, Score};

/// In-memory [`RegistrantStore`]. Serializable so a round can be persisted
/// between batch calls.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRegistrantStore {
    entries: Vec<Registrant>,
}

impl MemoryRegistrantStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direct read access to every entry, in insertion order.
    pub fn entries(&self) -> &[Registrant] {
        &self.entries
    }

    /// Sum of all scores, widened so it cannot overflow.
    pub fn total_score(&self) -> u128 {
        self.entries.iter().map(|r| r.score as u128).sum()
    }
}

impl RegistrantStore for MemoryRegistrantStore {
    fn append_batch(
        &mut self,
        identifiers: &[ParticipantId],
        scores: &[Score],
    ) -> Result<(), StoreError> {
        if identifiers.len() != scores.len() {
            return Err(StoreError::LengthMismatch {
                identifiers: identifiers.len(),
                scores: scores.len(),
            });
        }
        self.entries.extend(
            identifiers
                .iter()
                .zip(scores)
                .map(|(id, score)| Registrant::new(*id, *score)),
        );
        tracing::debug!(
            appended = identifiers.len(),
            total = self.entries.len(),
            "registrants appended"
        );
        Ok(())
    }

    fn range(&self, start: usize, end: usize) -> Result<Vec<Registrant>, StoreError> {
        if start > end || end > self.entries.len() {
            return Err(StoreError::OutOfRange {
                start,
                end,
                len: self.entries.len(),
            });
        }
        Ok(self.entries[start..end].to_vec())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
