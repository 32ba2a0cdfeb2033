//! Nullable random source: scripted random words.

use launch_rng::RandomSource;

/// A deterministic random source for testing.
///
/// Returns pre-configured words in order, cycling when exhausted, and counts
/// how many words were drawn.
pub struct NullRandom {
    outputs: Vec<u64>,
    index: usize,
}

impl NullRandom {
    /// Create with a sequence of scripted words.
    ///
    /// # Panics
    /// Panics if `outputs` is empty.
    pub fn new(outputs: Vec<u64>) -> Self {
        assert!(!outputs.is_empty(), "NullRandom needs at least one output");
        Self { outputs, index: 0 }
    }

    /// Create with a single word that will be returned for every call.
    pub fn constant(value: u64) -> Self {
        Self::new(vec![value])
    }

    /// Number of words drawn so far.
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl RandomSource for NullRandom {
    fn next_u64(&mut self) -> u64 {
        let current = self.outputs[self.index % self.outputs.len()];
        self.index += 1;
        current
    }

    fn name(&self) -> &str {
        "null-random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_outputs() {
        let mut rng = NullRandom::new(vec![1, 2, 3]);
        let got: Vec<u64> = (0..5).map(|_| rng.next_u64()).collect();
        assert_eq!(got, vec![1, 2, 3, 1, 2]);
        assert_eq!(rng.draws(), 5);
    }

    #[test]
    fn constant_repeats() {
        let mut rng = NullRandom::constant(9);
        assert_eq!(rng.next_u64(), 9);
        assert_eq!(rng.next_u64(), 9);
        assert_eq!(rng.name(), "null-random");
    }
}
