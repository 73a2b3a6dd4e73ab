//! Backing memory providers.
//!
//! The arena never calls the global allocator directly; it goes through a
//! [`MemoryProvider`], so the backing store can be swapped out (pooled
//! memory, instrumented counters in tests) without touching allocator
//! logic. Failure signalling is infallible-by-value: `reserve` returns
//! `None` on exhaustion instead of aborting, and the arena propagates that
//! as [`ArenaError::MemoryExhausted`](crate::ArenaError::MemoryExhausted).

/// Source and sink for region backing buffers.
///
/// Implementations must return a zero-initialised buffer of exactly `units`
/// allocation units, or `None` when the reservation cannot be satisfied.
/// `release` must accept any buffer previously returned by `reserve`.
pub trait MemoryProvider {
    /// Reserve a buffer of `units` allocation units, or `None` on exhaustion.
    fn reserve(&mut self, units: usize) -> Option<Vec<usize>>;

    /// Return a previously reserved buffer.
    fn release(&mut self, buffer: Vec<usize>);
}

/// The default provider: plain heap allocation.
///
/// Uses `try_reserve_exact` so out-of-memory surfaces as `None` rather than
/// an allocator abort.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemProvider;

impl MemoryProvider for SystemProvider {
    fn reserve(&mut self, units: usize) -> Option<Vec<usize>> {
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(units).ok()?;
        buffer.resize(units, 0);
        Some(buffer)
    }

    fn release(&mut self, buffer: Vec<usize>) {
        drop(buffer);
    }
}
