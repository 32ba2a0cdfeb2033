//! Registrant storage trait.

use crate::StoreError;
use launch_types::{ParticipantId, Registrant, Score};

/// Ordered, append-only record of a round's registrants.
///
/// Entries are addressed by a zero-based index; `len` never decreases within
/// a round.
pub trait RegistrantStore {
    /// Append one entry per identifier, paired with the score at the same
    /// position. Nothing is written when the lengths differ.
    fn append_batch(
        &mut self,
        identifiers: &[ParticipantId],
        scores: &[Score],
    ) -> Result<(), StoreError>;

    /// Entries with index in `[start, end)`.
    fn range(&self, start: usize, end: usize) -> Result<Vec<Registrant>, StoreError>;

    /// Current number of entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
