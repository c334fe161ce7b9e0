//! Strongly-typed identifiers for stores and slot generations.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`StoreId`] allocation.
static STORE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for an array store.
///
/// Allocated from a monotonic atomic counter via [`StoreId::next`].
/// Every handle records the store that issued it, so a handle presented
/// to a different store is recognised as foreign rather than silently
/// resolving to whatever happens to occupy the same slot there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreId(u64);

impl StoreId {
    /// Allocate a fresh, unique store ID.
    ///
    /// Each call returns an ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(STORE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generation counter of a store slot.
///
/// Advanced every time the slot's contents are invalidated (free or
/// resize). A handle is live only while its recorded generation equals
/// the slot's current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation a freshly created slot starts at.
    pub const FIRST: Generation = Generation(0);

    /// The generation that follows this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
