//! Regions: the contiguous storage units of the arena chain.
//!
//! A [`Region`] owns an optional buffer of word-sized allocation units and a
//! bump cursor. The head region of an arena starts without a buffer and is
//! materialised by the first allocation; every later region is created
//! already holding its first allocation.

/// One link of the arena chain: an optional backing buffer plus a bump cursor.
///
/// A region is in one of two shapes: *empty* (no buffer, zero capacity, zero
/// used) or *active* (buffer present, `used <= capacity`). Capacity never
/// shrinks once a buffer is installed; only `used` moves, forward on carve
/// and back to zero on reset.
pub struct Region {
    /// Backing storage, in allocation units. `None` until materialised.
    buffer: Option<Vec<usize>>,
    /// Bump cursor: units already handed out from this region.
    used: usize,
}

impl Region {
    /// Create an empty region with no backing buffer.
    pub(crate) fn empty() -> Self {
        Self {
            buffer: None,
            used: 0,
        }
    }

    /// Create a region born active, with `used` units already consumed by
    /// the allocation that forced its creation.
    pub(crate) fn with_first_alloc(buffer: Vec<usize>, used: usize) -> Self {
        debug_assert!(used <= buffer.len());
        Self {
            buffer: Some(buffer),
            used,
        }
    }

    /// Install a buffer into an empty region and consume its first `used`
    /// units. Only ever called on the still-empty head.
    pub(crate) fn install(&mut self, buffer: Vec<usize>, used: usize) {
        debug_assert!(self.buffer.is_none());
        debug_assert!(used <= buffer.len());
        self.buffer = Some(buffer);
        self.used = used;
    }

    /// Carve `units` allocation units off the front of the free space and
    /// return their starting offset. Callers must have checked
    /// [`remaining`](Region::remaining) first.
    pub(crate) fn carve(&mut self, units: usize) -> usize {
        debug_assert!(units <= self.remaining());
        let offset = self.used;
        self.used += units;
        offset
    }

    /// Reset the bump cursor without touching the buffer contents.
    pub(crate) fn reset(&mut self) {
        self.used = 0;
    }

    /// Detach the backing buffer, returning the region to its empty shape.
    pub(crate) fn take_buffer(&mut self) -> Option<Vec<usize>> {
        self.used = 0;
        self.buffer.take()
    }

    /// Units already handed out from this region.
    pub fn used(&self) -> usize {
        self.used
    }

    /// Total capacity in allocation units (0 while no buffer is installed).
    pub fn capacity(&self) -> usize {
        self.buffer.as_ref().map_or(0, Vec::len)
    }

    /// Remaining free capacity in allocation units.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.used
    }

    /// Whether a backing buffer has been materialised.
    pub fn has_buffer(&self) -> bool {
        self.buffer.is_some()
    }

    /// Memory usage of the backing buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.capacity() * std::mem::size_of::<usize>()
    }

    /// Get a shared slice at the given offset and length.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds the region's capacity.
    pub fn slice(&self, offset: usize, len: usize) -> &[usize] {
        let buffer = self.buffer.as_deref().unwrap_or(&[]);
        &buffer[offset..offset + len]
    }

    /// Get a mutable slice at the given offset and length.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds the region's capacity.
    pub fn slice_mut(&mut self, offset: usize, len: usize) -> &mut [usize] {
        let buffer: &mut [usize] = self.buffer.as_deref_mut().unwrap_or(&mut []);
        &mut buffer[offset..offset + len]
    }
}
