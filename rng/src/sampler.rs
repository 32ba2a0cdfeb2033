//! Bounded draws for the ticket-burn lottery.
//!
//! Draws are `next() % cap`. The modulo bias is kept on purpose so results
//! line up with the existing lottery math; at caps far below 2^64 it is
//! negligible.

use crate::{RandomSource, RngError};

/// Draws uniformly-ish distributed integers below a cap from a [`RandomSource`].
pub struct BoundedDrawSampler<R> {
    source: R,
}

impl<R: RandomSource> BoundedDrawSampler<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn into_inner(self) -> R {
        self.source
    }

    /// Return a value in `[0, cap)`.
    ///
    /// A zero cap is rejected before the stream advances.
    pub fn draw_below(&mut self, cap: u64) -> Result<u64, RngError> {
        if cap == 0 {
            return Err(RngError::InvalidCap(cap));
        }
        Ok(self.source.next_u64() % cap)
    }

    /// Draw the winning-ticket index for a pool of `total_tickets`.
    ///
    /// Only the first `win_cap` tickets are eligible, so the draw is taken
    /// below `min(total_tickets, win_cap)` (a zero `win_cap` counts as one).
    /// The result is always strictly less than `total_tickets`.
    pub fn draw_winning_tickets(&mut self, total_tickets: u64, win_cap: u64) -> Result<u64, RngError> {
        if total_tickets == 0 {
            return Err(RngError::InvalidCap(total_tickets));
        }
        self.draw_below(total_tickets.min(win_cap.max(1)))
    }

    /// How many of a user's `user_tickets` win, when each ticket draws below
    /// `total_tickets` and wins if the draw lands under `win_cap`.
    pub fn count_winning_tickets(
        &mut self,
        user_tickets: u64,
        total_tickets: u64,
        win_cap: u64,
    ) -> Result<u64, RngError> {
        if total_tickets == 0 {
            return Err(RngError::InvalidCap(total_tickets));
        }
        let mut wins = 0;
        for _ in 0..user_tickets {
            if self.draw_below(total_tickets)? < win_cap {
                wins += 1;
            }
        }
        tracing::trace!(user_tickets, total_tickets, win_cap, wins, "counted winning tickets");
        Ok(wins)
    }
}

/// Number of tickets a user may actually burn under the round's cap.
pub fn clamp_burn(requested: u64, burn_cap: u64) -> u64 {
    requested.min(burn_cap)
}
