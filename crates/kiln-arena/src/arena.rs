//! The arena allocator: first-fit search over a chain of regions with
//! capacity-doubling growth.

use crate::config::{bytes_to_units, ArenaConfig};
use crate::dump::RegionDump;
use crate::error::ArenaError;
use crate::handle::AllocHandle;
use crate::provider::{MemoryProvider, SystemProvider};
use crate::region::Region;

/// A chained bump-pointer arena.
///
/// The arena owns a chain of [`Region`]s, ordered by creation. Allocation
/// walks the chain front to back and carves the request out of the first
/// region with enough free space; when none qualifies, a new region is
/// reserved from the provider and appended. Memory is reclaimed in bulk via
/// [`reset`](Arena::reset) (recycle) or [`release`](Arena::release) (return
/// to the provider) — never per allocation.
///
/// # Example
///
/// ```rust
/// use kiln_arena::Arena;
///
/// let mut arena = Arena::new();
/// let handle = arena.alloc(64).unwrap();
/// arena.slice_mut(handle)[0] = 42;
/// assert_eq!(arena.slice(handle)[0], 42);
/// arena.release();
/// ```
pub struct Arena<P: MemoryProvider = SystemProvider> {
    /// The region chain. Index 0 is the head and is always present; it is
    /// the only region that may exist without a backing buffer.
    regions: Vec<Region>,
    config: ArenaConfig,
    provider: P,
}

impl Arena<SystemProvider> {
    /// Create an arena with the default config and system heap backing.
    ///
    /// No memory is reserved until the first allocation.
    pub fn new() -> Self {
        Self::with_config(ArenaConfig::default())
    }

    /// Create an arena with the given config and system heap backing.
    pub fn with_config(config: ArenaConfig) -> Self {
        Self::with_provider(config, SystemProvider)
    }
}

impl Default for Arena<SystemProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: MemoryProvider> Arena<P> {
    /// Create an arena backed by a custom memory provider.
    pub fn with_provider(config: ArenaConfig, provider: P) -> Self {
        Self {
            regions: vec![Region::empty()],
            config,
            provider,
        }
    }

    /// Allocate `bytes` bytes from the arena.
    ///
    /// A zero-byte request returns [`AllocHandle::EMPTY`] without touching
    /// any region. Otherwise the request is converted to allocation units
    /// (see [`bytes_to_units`]) and served first-fit; a miss reserves a new
    /// region, doubling from [`ArenaConfig::region_size`] until the request
    /// fits.
    ///
    /// On failure nothing is mutated: no region's cursor moves and no
    /// half-linked region is left behind.
    pub fn alloc(&mut self, bytes: usize) -> Result<AllocHandle, ArenaError> {
        if bytes == 0 {
            return Ok(AllocHandle::EMPTY);
        }
        let units = bytes_to_units(bytes);

        // First fit: the earliest region with enough free space wins.
        if let Some(index) = self.regions.iter().position(|r| units <= r.remaining()) {
            let offset = self.regions[index].carve(units);
            return Ok(AllocHandle::new(index, offset, units));
        }

        // No region qualifies. Size a new one, then reserve before linking
        // anything so a failed reservation leaves the chain untouched.
        let capacity = grow_capacity(self.config.region_size, units)
            .ok_or(ArenaError::CapacityOverflow { requested: bytes })?;
        let buffer =
            self.provider
                .reserve(capacity)
                .ok_or(ArenaError::MemoryExhausted {
                    requested: bytes,
                    capacity,
                })?;

        let tail_is_blank = !self
            .regions
            .last()
            .expect("chain always has a head")
            .has_buffer();
        if tail_is_blank {
            // Still-empty head: the only time a region is materialised in
            // place rather than appended.
            let head = self.regions.last_mut().expect("chain always has a head");
            head.install(buffer, units);
        } else {
            self.regions.push(Region::with_first_alloc(buffer, units));
        }
        Ok(AllocHandle::new(self.regions.len() - 1, 0, units))
    }

    /// Rewind every region's cursor to zero.
    ///
    /// Capacities and buffer contents are untouched — previously written
    /// words stay readable until overwritten by later allocations. After a
    /// reset the arena serves requests from the existing chain again,
    /// starting at the head.
    pub fn reset(&mut self) {
        for region in &mut self.regions {
            region.reset();
        }
    }

    /// Return every buffer to the provider and drop all non-head regions.
    ///
    /// Afterwards the arena is indistinguishable from a freshly created one:
    /// a single empty head, no backing memory held. The arena remains usable
    /// for further allocation.
    pub fn release(&mut self) {
        for region in &mut self.regions {
            if let Some(buffer) = region.take_buffer() {
                self.provider.release(buffer);
            }
        }
        self.regions.truncate(1);
    }

    /// Resolve a handle to a shared slice of allocation units.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not refer to a live range in this arena
    /// (e.g. it predates a [`release`](Arena::release)).
    pub fn slice(&self, handle: AllocHandle) -> &[usize] {
        self.regions[handle.region].slice(handle.offset, handle.len)
    }

    /// Resolve a handle to a mutable slice of allocation units.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not refer to a live range in this arena.
    pub fn slice_mut(&mut self, handle: AllocHandle) -> &mut [usize] {
        self.regions[handle.region].slice_mut(handle.offset, handle.len)
    }

    /// Render a region's metadata and raw contents for diagnostics.
    ///
    /// Returns `None` if no region exists at `index`. The returned adapter
    /// implements `Display` and can be written to any sink.
    pub fn dump(&self, index: usize) -> Option<RegionDump<'_>> {
        let region = self.regions.get(index)?;
        let next = (index + 1 < self.regions.len()).then_some(index + 1);
        Some(RegionDump::new(index, region, next))
    }

    /// Borrow a region for inspection.
    pub fn region(&self, index: usize) -> Option<&Region> {
        self.regions.get(index)
    }

    /// Number of regions in the chain (the empty head counts).
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Total allocation units handed out across all regions.
    pub fn total_used(&self) -> usize {
        self.regions.iter().map(Region::used).sum()
    }

    /// Total capacity in allocation units across all regions.
    pub fn total_capacity(&self) -> usize {
        self.regions.iter().map(Region::capacity).sum()
    }

    /// Total backing memory held, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.regions.iter().map(Region::memory_bytes).sum()
    }

    /// The configuration this arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }
}

/// Double `capacity` until it covers `units`, or `None` if doubling would
/// overflow `usize` first.
fn grow_capacity(mut capacity: usize, units: usize) -> Option<usize> {
    while capacity < units {
        capacity = capacity.checked_mul(2)?;
    }
    Some(capacity)
}
