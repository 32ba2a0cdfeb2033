//! xoroshiro128** seeded through splitmix64.
//!
//! Output must stay bit-exact: the winner set of a round is reproduced by
//! anyone holding the seed and the registrant list.

use serde::{Deserialize, Serialize};

use crate::RandomSource;

const SPLITMIX_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Substituted when seeding would leave the state all-zero.
const NONZERO_FALLBACK: u64 = 0x2545_F491_4F6C_DD1D;

/// Generator state: two 64-bit words, never both zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xoroshiro128StarStar {
    s0: u64,
    s1: u64,
}

impl Xoroshiro128StarStar {
    /// Create a generator seeded from `value`.
    pub fn new(value: u64) -> Self {
        let mut rng = Self { s0: 0, s1: 0 };
        rng.seed(value);
        rng
    }

    /// Build directly from raw state words, e.g. when restoring a snapshot.
    pub fn from_state(s0: u64, s1: u64) -> Self {
        if s0 == 0 && s1 == 0 {
            return Self {
                s0: NONZERO_FALLBACK,
                s1: 0,
            };
        }
        Self { s0, s1 }
    }

    pub fn state(&self) -> (u64, u64) {
        (self.s0, self.s1)
    }

    /// Reset the state from `value` via two splitmix64 steps.
    pub fn seed(&mut self, value: u64) {
        let mut x = value;
        let s0 = splitmix64(&mut x);
        let s1 = splitmix64(&mut x);
        *self = Self::from_state(s0, s1);
    }

    /// Refresh the stream between rounds.
    pub fn reseed(&mut self, value: u64) {
        self.seed(value);
        tracing::info!(seed = value, "random source reseeded");
    }

    /// Advance the state and return the next word.
    pub fn next(&mut self) -> u64 {
        let s0 = self.s0;
        let mut s1 = self.s1;
        let result = s0.wrapping_mul(5).rotate_left(7).wrapping_mul(9);

        s1 ^= s0;
        self.s0 = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.s1 = s1.rotate_left(37);

        result
    }
}

impl RandomSource for Xoroshiro128StarStar {
    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    fn name(&self) -> &str {
        "xoroshiro128**"
    }
}

fn splitmix64(x: &mut u64) -> u64 {
    *x = x.wrapping_add(SPLITMIX_GAMMA);
    let mut z = *x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_zero_matches_splitmix_reference() {
        let rng = Xoroshiro128StarStar::new(0);
        assert_eq!(rng.state(), (0xe220_a839_7b1d_cdaf, 0x6e78_9e6a_a1b9_65f4));
    }

    #[test]
    fn reference_outputs_from_raw_state() {
        let mut rng = Xoroshiro128StarStar::from_state(1, 2);
        assert_eq!(rng.next(), 5760);
        assert_eq!(rng.next(), 97_769_243_520);
        assert_eq!(rng.next(), 9_706_862_127_477_703_552);
    }

    #[test]
    fn seeded_stream_is_bit_exact() {
        let mut rng = Xoroshiro128StarStar::new(0);
        let got: Vec<u64> = (0..4).map(|_| rng.next()).collect();
        assert_eq!(
            got,
            vec![
                16_053_376_993_090_331_485,
                7_868_822_567_099_391_496,
                12_331_295_923_365_717_130,
                9_777_274_940_305_850_302,
            ]
        );

        let mut rng = Xoroshiro128StarStar::new(76823);
        assert_eq!(rng.state(), (0x4682_4317_64e3_e10e, 0x9a4f_c735_46d4_7942));
        assert_eq!(rng.next(), 8_279_180_024_490_736_816);
        assert_eq!(rng.next(), 13_665_612_143_822_263_286);
    }

    #[test]
    fn reseed_restarts_the_stream() {
        let mut rng = Xoroshiro128StarStar::new(99);
        let first = rng.next();
        rng.next();
        rng.reseed(99);
        assert_eq!(rng.next(), first);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Xoroshiro128StarStar::new(1);
        let mut b = Xoroshiro128StarStar::new(2);
        assert_ne!(a.next(), b.next());
    }

    #[test]
    fn all_zero_state_is_replaced() {
        let rng = Xoroshiro128StarStar::from_state(0, 0);
        assert_ne!(rng.state(), (0, 0));
    }

    #[test]
    fn state_survives_bincode() {
        let mut rng = Xoroshiro128StarStar::new(5);
        rng.next();
        let bytes = bincode::serialize(&rng).unwrap();
        let mut restored: Xoroshiro128StarStar = bincode::deserialize(&bytes).unwrap();
        assert_eq!(restored.next(), rng.next());
    }
}
