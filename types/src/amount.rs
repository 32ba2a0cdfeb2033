//! Allocation amounts.
//!
//! Allocations are raw purchase-quota units stored as u128. A winner's
//! allocation is always a whole multiple of the round's base allocation unit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Purchase quota unlocked for a winning participant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Allocation(u128);

impl Allocation {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// `unit * tickets`, or `None` on overflow.
    pub fn checked_mul(self, tickets: u64) -> Option<Self> {
        self.0.checked_mul(tickets as u128).map(Self)
    }
}

impl Add for Allocation {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl From<u64> for Allocation {
    fn from(raw: u64) -> Self {
        Self(raw as u128)
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
