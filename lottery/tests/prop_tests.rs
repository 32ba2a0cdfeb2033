use std::collections::HashMap;

use proptest::prelude::*;

use launch_lottery::{BatchOutcome, WinnerSelectionEngine};
use launch_rng::{BoundedDrawSampler, Xoroshiro128StarStar};
use launch_store::{MemoryRegistrantStore, RegistrantStore};
use launch_types::{Allocation, ParticipantId};

/// `n` registrants drawn from a pool of `n / 2` identifiers, scores in [1, 50].
fn synthetic_population(n: usize, seed: u64) -> MemoryRegistrantStore {
    let mut sampler = BoundedDrawSampler::new(Xoroshiro128StarStar::new(seed));
    let pool = (n as u64 / 2).max(1);
    let mut ids = Vec::with_capacity(n);
    let mut scores = Vec::with_capacity(n);
    for _ in 0..n {
        ids.push(ParticipantId::from(99_999 + sampler.draw_below(pool).unwrap()));
        scores.push(1 + sampler.draw_below(50).unwrap());
    }
    let mut store = MemoryRegistrantStore::new();
    store.append_batch(&ids, &scores).unwrap();
    store
}

/// Run selection over the whole store with the given batch sizes (the last
/// batch absorbs any remainder).
fn run_in_batches(
    store: &MemoryRegistrantStore,
    seed: u64,
    target: u32,
    sizes: &[usize],
) -> WinnerSelectionEngine {
    let mut rng = Xoroshiro128StarStar::new(seed);
    let mut engine = WinnerSelectionEngine::new(target, 1);
    let len = store.len();
    let mut start = 0;
    for &size in sizes {
        if start >= len {
            break;
        }
        let end = (start + size.max(1)).min(len) - 1;
        engine.select_winners(store, &mut rng, start, end).unwrap();
        start = end + 1;
    }
    if start < len {
        engine.select_winners(store, &mut rng, start, len - 1).unwrap();
    }
    engine.finalize(store).unwrap();
    engine
}

fn allocations(engine: &WinnerSelectionEngine) -> Vec<(ParticipantId, Allocation)> {
    engine.ledger().iter().map(|(id, a)| (*id, *a)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Any partitioning of a 500-registrant population yields the same ledger
    /// as a single batch over the whole range.
    #[test]
    fn ledger_is_independent_of_batching(
        seed in any::<u64>(),
        target in 1u32..300,
        sizes in prop::collection::vec(1usize..120, 1..40),
    ) {
        let store = synthetic_population(500, seed ^ 0x5eed);
        let single = run_in_batches(&store, seed, target, &[500]);
        let batched = run_in_batches(&store, seed, target, &sizes);

        prop_assert_eq!(allocations(&single), allocations(&batched));
        prop_assert_eq!(single.reservoir(), batched.reservoir());
    }

    /// After finalization, winners == min(target, population).
    #[test]
    fn winner_count_is_bounded(
        seed in any::<u64>(),
        population in 0usize..200,
        target in 0u32..120,
    ) {
        let store = synthetic_population(population, seed);
        let engine = run_in_batches(&store, seed, target, &[17]);
        prop_assert_eq!(engine.get_winners().len(), population.min(target as usize));
        prop_assert!(engine.cursor().winners_drawn_so_far <= target as usize);
    }

    /// Every identifier's allocation equals unit * its number of winning tickets.
    #[test]
    fn allocation_matches_ticket_multiplicity(seed in any::<u64>(), target in 1u32..100) {
        let store = synthetic_population(150, seed);
        let engine = run_in_batches(&store, seed, target, &[40, 40, 40]);

        let mut counts: HashMap<ParticipantId, u128> = HashMap::new();
        for id in engine.get_winners() {
            *counts.entry(id).or_default() += 1;
        }
        for (id, allocation) in engine.ledger().iter() {
            prop_assert_eq!(allocation.raw(), counts[id]);
        }
        prop_assert_eq!(counts.len(), engine.ledger().len());
    }
}

#[test]
fn winner_count_at_boundary_sizes() {
    let target = 25u32;
    for population in [0usize, 1, 25, 1_000] {
        let store = synthetic_population(population, 11);
        let engine = run_in_batches(&store, 11, target, &[64]);
        assert_eq!(
            engine.get_winners().len(),
            population.min(target as usize),
            "population {population}"
        );
    }
}

#[test]
fn all_win_allocations_are_proportional_to_entries() {
    let store = synthetic_population(80, 3);
    let mut rng = Xoroshiro128StarStar::new(3);
    let mut engine = WinnerSelectionEngine::new(80, 4);
    engine.select_winners(&store, &mut rng, 0, 79).unwrap();

    let mut entries: HashMap<ParticipantId, u128> = HashMap::new();
    for r in store.entries() {
        *entries.entry(r.identifier).or_default() += 1;
    }
    for (id, count) in entries {
        assert_eq!(engine.get_allocation(&id), Allocation::new(4 * count));
    }
}

#[test]
fn scale_scenario_four_unequal_batches() {
    let store = synthetic_population(500, 76823);
    let mut rng = Xoroshiro128StarStar::new(76823);
    let mut engine = WinnerSelectionEngine::new(250, 1);

    let mut start = 0;
    for size in [150, 150, 150, 50] {
        engine
            .select_winners(&store, &mut rng, start, start + size - 1)
            .unwrap();
        start += size;
    }

    assert!(engine.is_finalized());
    let winners = engine.get_winners();
    assert_eq!(winners.len(), 250);
    let total: u128 = engine.ledger().iter().map(|(_, a)| a.raw()).sum();
    assert_eq!(total, 250);
}

#[test]
fn resubmitted_batches_do_not_change_allocations() {
    let store = synthetic_population(300, 9);
    let mut rng = Xoroshiro128StarStar::new(9);
    let mut engine = WinnerSelectionEngine::new(40, 1);

    for (start, end) in [(0, 99), (100, 199), (200, 299)] {
        engine.select_winners(&store, &mut rng, start, end).unwrap();
    }
    let before = allocations(&engine);

    for (start, end) in [(0, 99), (100, 199), (200, 299), (0, 299)] {
        assert_eq!(
            engine.select_winners(&store, &mut rng, start, end).unwrap(),
            BatchOutcome::AlreadyProcessed
        );
    }
    assert_eq!(allocations(&engine), before);
}
