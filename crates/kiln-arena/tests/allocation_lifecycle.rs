//! End-to-end lifecycle tests through the public API: allocate across a
//! growing chain, recycle with reset, tear down with release, come back up.

use kiln_arena::{Arena, ArenaConfig, ArenaError, MemoryProvider};

#[test]
fn parser_like_workload_grows_and_recycles() {
    let mut arena = Arena::with_config(ArenaConfig::new(64));

    // Simulate a batch of token-sized allocations followed by a large node.
    let tokens: Vec<_> = (0..50).map(|i| arena.alloc(8 + i % 16).unwrap()).collect();
    let node = arena.alloc(2048).unwrap();
    assert!(arena.region_count() > 1);

    // Write through each handle and verify nothing stomps anything else.
    for (i, &h) in tokens.iter().enumerate() {
        arena.slice_mut(h).fill(i);
    }
    arena.slice_mut(node).fill(usize::MAX);
    for (i, &h) in tokens.iter().enumerate() {
        assert!(arena.slice(h).iter().all(|&w| w == i), "token {i} clobbered");
    }

    // Next "parse": same chain, no new regions.
    let regions_before = arena.region_count();
    let capacity_before = arena.total_capacity();
    arena.reset();
    for i in 0..50 {
        arena.alloc(8 + i % 16).unwrap();
    }
    arena.alloc(2048).unwrap();
    assert_eq!(arena.region_count(), regions_before);
    assert_eq!(arena.total_capacity(), capacity_before);
}

#[test]
fn release_then_reuse_matches_a_fresh_arena() {
    let mut arena = Arena::with_config(ArenaConfig::new(16));
    arena.alloc(500).unwrap();
    arena.alloc(500).unwrap();
    arena.release();

    let mut fresh = Arena::with_config(ArenaConfig::new(16));
    assert_eq!(arena.region_count(), fresh.region_count());
    assert_eq!(arena.total_capacity(), fresh.total_capacity());
    assert_eq!(arena.total_used(), fresh.total_used());

    // Both serve the same request identically.
    let a = arena.alloc(14).unwrap();
    let b = fresh.alloc(14).unwrap();
    assert_eq!(a, b);
}

#[test]
fn exhaustion_and_recovery() {
    /// Provider with a fixed budget of buffers.
    struct BudgetProvider {
        budget: usize,
    }

    impl MemoryProvider for BudgetProvider {
        fn reserve(&mut self, units: usize) -> Option<Vec<usize>> {
            if self.budget == 0 {
                return None;
            }
            self.budget -= 1;
            Some(vec![0; units])
        }

        fn release(&mut self, buffer: Vec<usize>) {
            self.budget += 1;
            drop(buffer);
        }
    }

    let mut arena = Arena::with_provider(ArenaConfig::new(16), BudgetProvider { budget: 2 });
    arena.alloc(60).unwrap();
    arena.alloc(60).unwrap();
    let err = arena.alloc(60).unwrap_err();
    assert!(matches!(err, ArenaError::MemoryExhausted { .. }));

    // The caller's documented recovery: reset and retry within the chain.
    arena.reset();
    assert!(arena.alloc(60).is_ok());

    // Or release, returning budget to the provider, and start over.
    arena.release();
    assert!(arena.alloc(60).is_ok());
}
