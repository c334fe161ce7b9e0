//! Array handles, views, and the polymorphic [`ArrayRef`].
//!
//! An [`ArrayHandle`] names a slot in a store together with the slot
//! generation it was issued under: the generation allows O(1) staleness
//! checks without a lookup table. A [`View`] is a plain value describing
//! a contiguous byte region of one array; it owns nothing and becomes
//! stale together with its array's handle.

use std::fmt;

use multiarray_core::{Generation, StoreId};

/// Owning reference to an array in an [`ArrayStore`](crate::ArrayStore).
///
/// Handles are `Copy`; ownership of the payload stays with the store. A
/// handle is live until the array is freed or resized, after which every
/// operation rejects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct ArrayHandle {
    /// Store that issued this handle.
    pub(crate) store: StoreId,
    /// Slot index within the store.
    pub(crate) slot: u32,
    /// Slot generation when this handle was issued.
    pub(crate) generation: Generation,
}

impl ArrayHandle {
    pub(crate) fn new(store: StoreId, slot: u32, generation: Generation) -> Self {
        Self {
            store,
            slot,
            generation,
        }
    }

    /// The store that issued this handle.
    pub fn store(&self) -> StoreId {
        self.store
    }

    /// The slot generation this handle belongs to.
    pub fn generation(&self) -> Generation {
        self.generation
    }
}

impl fmt::Display for ArrayHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ArrayHandle(store={}, slot={}, gen={})",
            self.store, self.slot, self.generation
        )
    }
}

/// A non-owning descriptor of a contiguous region of an array.
///
/// Produced by [`ArrayStore::index`](crate::ArrayStore::index). Each
/// index call selects the next axis, so a view over an `n`-dimensional
/// array has `n - k` remaining dimensions after `k` selections. A view
/// with no remaining dimensions addresses exactly one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct View {
    /// Backing array. Carries the generation used for staleness checks.
    pub(crate) array: ArrayHandle,
    /// Byte offset of the region within the payload.
    pub(crate) offset: usize,
    /// Axes not yet selected.
    pub(crate) remaining: usize,
    /// Byte length of the region, which is also the stride of the most
    /// recently selected axis.
    pub(crate) extent: usize,
}

impl View {
    /// The backing array.
    pub fn array(&self) -> ArrayHandle {
        self.array
    }

    /// Byte offset of the region within the backing payload.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of axes that can still be indexed.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Byte length of the region.
    pub fn extent(&self) -> usize {
        self.extent
    }

    /// Whether the view addresses a single element.
    pub fn is_element(&self) -> bool {
        self.remaining == 0
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "View({}, off={}, len={}, remaining={})",
            self.array, self.offset, self.extent, self.remaining
        )
    }
}

/// Either an array or a view; the argument type of every store operation
/// that accepts both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArrayRef {
    /// A whole array.
    Array(ArrayHandle),
    /// A region of an array.
    View(View),
}

impl ArrayRef {
    /// The backing array's handle.
    pub fn handle(&self) -> ArrayHandle {
        match self {
            Self::Array(handle) => *handle,
            Self::View(view) => view.array,
        }
    }
}

impl From<ArrayHandle> for ArrayRef {
    fn from(handle: ArrayHandle) -> Self {
        Self::Array(handle)
    }
}

impl From<&ArrayHandle> for ArrayRef {
    fn from(handle: &ArrayHandle) -> Self {
        Self::Array(*handle)
    }
}

impl From<View> for ArrayRef {
    fn from(view: View) -> Self {
        Self::View(view)
    }
}

impl From<&View> for ArrayRef {
    fn from(view: &View) -> Self {
        Self::View(*view)
    }
}
