//! Allocation handles.
//!
//! An [`AllocHandle`] records the physical location of one allocation within
//! the arena: which region served it, the starting offset, and the length,
//! all in allocation units. Handles are plain data — resolving one to a
//! slice goes through [`Arena::slice`](crate::Arena::slice) or
//! [`Arena::slice_mut`](crate::Arena::slice_mut).

use std::fmt;

/// Physical location of an allocation within the arena.
///
/// A handle stays meaningful until the arena is reset or released; after
/// that, resolving it reads whatever now occupies those units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct AllocHandle {
    /// Index of the region that served the allocation.
    pub(crate) region: usize,
    /// Starting offset within the region's buffer, in units.
    pub(crate) offset: usize,
    /// Length of the allocation in units.
    pub(crate) len: usize,
}

impl AllocHandle {
    /// The empty handle, returned for zero-byte requests.
    pub const EMPTY: AllocHandle = AllocHandle {
        region: 0,
        offset: 0,
        len: 0,
    };

    /// Create a new handle.
    pub(crate) fn new(region: usize, offset: usize, len: usize) -> Self {
        Self {
            region,
            offset,
            len,
        }
    }

    /// Index of the region that served this allocation.
    pub fn region(&self) -> usize {
        self.region
    }

    /// Starting offset within the region, in allocation units.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the allocation in allocation units.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this is the empty (zero-byte request) handle.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for AllocHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AllocHandle(region={}, off={}, len={})",
            self.region, self.offset, self.len
        )
    }
}
