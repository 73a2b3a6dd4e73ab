//! Arena configuration parameters.

/// Configuration for the arena allocator.
///
/// Controls region sizing. Validated at construction; immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Starting capacity (in allocation units) for any region created by the
    /// growth path. Requests larger than this double it until they fit.
    ///
    /// Default: 8192 units. Must be at least 1 — the doubling loop would
    /// never terminate from 0.
    pub region_size: usize,
}

impl ArenaConfig {
    /// Default region size in allocation units (8K units).
    pub const DEFAULT_REGION_SIZE: usize = 8 * 1024;

    /// Create a config with the given region size.
    ///
    /// # Panics
    ///
    /// Panics if `region_size` is 0.
    pub fn new(region_size: usize) -> Self {
        assert!(region_size > 0, "region_size must be at least 1");
        Self { region_size }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_REGION_SIZE)
    }
}

/// Shift applied to a byte count to derive allocation units.
///
/// Kept at 2 (4 bytes per unit) even though a unit is a machine word. This
/// reproduces the conversion the allocator has always used; on 64-bit
/// targets it over-provisions by interpreting each 4-byte step as a full
/// word. Changing it would silently change every caller's effective
/// allocation size, so it is pinned by tests instead.
pub const BYTE_UNIT_SHIFT: u32 = 2;

/// Convert a requested byte count into allocation units.
///
/// One extra unit is always reserved beyond the shifted count to absorb
/// rounding, so any non-zero request maps to at least one unit.
pub fn bytes_to_units(bytes: usize) -> usize {
    (bytes >> BYTE_UNIT_SHIFT) + 1
}
