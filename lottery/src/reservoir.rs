//! Fixed-capacity reservoir of the heaviest weighted candidates.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use launch_types::ParticipantId;

/// A registrant entry competing for a winning slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Position of the entry in the registrant store.
    pub index: usize,
    pub identifier: ParticipantId,
    /// `random_word * score`, exact in 128 bits.
    pub weight: u128,
}

// Heap order: the weakest candidate (lowest weight, then latest index) is the
// greatest, so it sits on top of the max-heap and is the first evicted.
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of offering a candidate to the reservoir.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Offer {
    /// There was a free slot.
    Inserted,
    /// The candidate displaced the weakest resident.
    Evicted(Candidate),
    /// The candidate was not heavier than the weakest resident.
    Rejected,
}

/// Bounded working set of the current leading candidates.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Reservoir {
    capacity: usize,
    heap: BinaryHeap<Candidate>,
}

impl Reservoir {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// The resident that would be evicted next.
    pub fn weakest(&self) -> Option<&Candidate> {
        self.heap.peek()
    }

    /// Insert while there is room; afterwards replace the weakest resident
    /// only when the candidate's weight is strictly greater, so on exact ties
    /// the earlier registrant keeps its slot.
    pub fn offer(&mut self, candidate: Candidate) -> Offer {
        if !self.is_full() {
            self.heap.push(candidate);
            return Offer::Inserted;
        }
        match self.heap.peek_mut() {
            Some(mut weakest) if candidate.weight > weakest.weight => {
                let evicted = std::mem::replace(&mut *weakest, candidate);
                Offer::Evicted(evicted)
            }
            _ => Offer::Rejected,
        }
    }

    /// Residents ordered by registrant index.
    pub fn residents(&self) -> Vec<Candidate> {
        let mut all: Vec<Candidate> = self.heap.iter().copied().collect();
        all.sort_by_key(|c| c.index);
        all
    }

    /// Residents from strongest to weakest.
    pub fn ranked(&self) -> Vec<Candidate> {
        self.heap.clone().into_sorted_vec()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl PartialEq for Reservoir {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity && self.residents() == other.residents()
    }
}

impl Eq for Reservoir {}
