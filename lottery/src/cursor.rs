//! Progress marker for resumable selection.

use serde::{Deserialize, Serialize};

/// Where the next batch must start and how full the reservoir is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchCursor {
    /// First registrant index not yet scanned.
    pub next_start_index: usize,
    /// Current reservoir occupancy; never exceeds `target_total_winners`.
    pub winners_drawn_so_far: usize,
    pub target_total_winners: usize,
}

impl BatchCursor {
    pub fn new(target_total_winners: usize) -> Self {
        Self {
            next_start_index: 0,
            winners_drawn_so_far: 0,
            target_total_winners,
        }
    }

    /// Whether the inclusive range `[start, end]` lies entirely behind the cursor.
    pub fn covers(&self, end_inclusive: usize) -> bool {
        end_inclusive < self.next_start_index
    }

    /// Whether every registrant of a store of length `len` has been scanned.
    pub fn is_complete(&self, len: usize) -> bool {
        self.next_start_index >= len
    }

    pub fn has_started(&self) -> bool {
        self.next_start_index > 0
    }

    pub(crate) fn advance(&mut self, next_start_index: usize, winners_drawn_so_far: usize) {
        debug_assert!(next_start_index > self.next_start_index);
        debug_assert!(winners_drawn_so_far <= self.target_total_winners);
        self.next_start_index = next_start_index;
        self.winners_drawn_so_far = winners_drawn_so_far;
    }
}
