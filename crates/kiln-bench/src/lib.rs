//! Benchmark workloads and utilities for the kiln arena allocator.
//!
//! Provides deterministic allocation-size sequences so benchmark runs are
//! comparable across machines and revisions.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Generate a deterministic sequence of `n` request sizes in
/// `[1, max_bytes]`, seeded LCG-style.
///
/// Mimics a parser-like workload: mostly small requests with the occasional
/// larger one.
pub fn request_sizes(n: usize, max_bytes: usize, seed: u64) -> Vec<usize> {
    let mut state = seed;
    let mut sizes = Vec::with_capacity(n);
    for _ in 0..n {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // Square the unit interval to bias towards small sizes.
        let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
        let size = 1 + ((unit * unit) * (max_bytes - 1) as f64) as usize;
        sizes.push(size);
    }
    sizes
}
