//! Chained bump-pointer arena allocation with bulk-lifetime release.
//!
//! An [`Arena`] hands out ranges of word-sized allocation units from a chain
//! of pre-reserved regions. Individual allocations are never freed; the whole
//! arena is [`reset`](Arena::reset) (recycle the space) or
//! [`release`](Arena::release)d (return it to the backing provider) in bulk.
//! This suits workloads that build many short-lived objects in rapid
//! succession — parsers, compilers, per-request scratch data.
//!
//! # Architecture
//!
//! ```text
//! Arena<P: MemoryProvider>
//! ├── Vec<Region>        (head always present; grows on first-fit miss)
//! │   └── Region         (Option<Vec<usize>> buffer + bump cursor)
//! ├── ArenaConfig        (region sizing, byte→unit conversion)
//! └── P                  (backing memory provider, SystemProvider default)
//! ```
//!
//! Allocation walks the chain front to back and serves the request from the
//! first region with enough free space. When no region qualifies, a new
//! region is reserved, starting at [`ArenaConfig::DEFAULT_REGION_SIZE`] and
//! doubling until the request fits.
//!
//! Callers receive an [`AllocHandle`] rather than a raw pointer and resolve
//! it to a slice via [`Arena::slice`] / [`Arena::slice_mut`].
//!
//! # Concurrency
//!
//! The arena is a plain mutable structure with no internal locking. Share it
//! across threads only behind external synchronisation (or use one arena per
//! thread).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod dump;
pub mod error;
pub mod handle;
pub mod provider;
pub mod region;

// Public re-exports for the primary API surface.
pub use arena::Arena;
pub use config::ArenaConfig;
pub use dump::RegionDump;
pub use error::ArenaError;
pub use handle::AllocHandle;
pub use provider::{MemoryProvider, SystemProvider};
pub use region::Region;
