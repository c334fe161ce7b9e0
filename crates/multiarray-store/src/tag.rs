//! Liveness tags and the generation-checked slot registry.
//!
//! [`Registry`] owns every array's contents in a slot table. Each slot has
//! a generation; handles record the generation they were issued under.
//! Freeing or resizing an array advances the slot's generation, which
//! makes every earlier handle and every view built from one classify as
//! [`Tag::Freed`] without touching the handles themselves.
//!
//! Dead slots are kept on a free list and reused; the advanced generation
//! keeps a recycled slot from resurrecting old handles.

use multiarray_core::{ArrayError, Generation, Operation, StoreId};

use crate::handle::ArrayHandle;

/// Liveness classification of a handle or view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// A handle to a live array.
    ArrayLive,
    /// A view over a live array.
    ViewLive,
    /// A handle or view whose array has been freed or resized since it
    /// was issued.
    Freed,
}

struct Slot<T> {
    generation: Generation,
    value: Option<T>,
}

/// Slot table mapping handles to their contents.
pub(crate) struct Registry<T> {
    id: StoreId,
    slots: Vec<Slot<T>>,
    /// Indices of vacant slots available for reuse.
    free_list: Vec<u32>,
}

impl<T> Registry<T> {
    pub(crate) fn new() -> Self {
        Self {
            id: StoreId::next(),
            slots: Vec::new(),
            free_list: Vec::new(),
        }
    }

    pub(crate) fn id(&self) -> StoreId {
        self.id
    }

    /// Store `value` in a vacant slot and issue a handle for it.
    pub(crate) fn insert(&mut self, value: T) -> Result<ArrayHandle, ArrayError> {
        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            slot.value = Some(value);
            return Ok(ArrayHandle::new(self.id, index, slot.generation));
        }
        let index = u32::try_from(self.slots.len())
            .map_err(|_| ArrayError::capacity("store slot table is full"))?;
        self.slots.push(Slot {
            generation: Generation::FIRST,
            value: Some(value),
        });
        Ok(ArrayHandle::new(self.id, index, Generation::FIRST))
    }

    /// Classify an array handle. `None` means the handle was not issued
    /// by this registry.
    pub(crate) fn classify(&self, handle: ArrayHandle) -> Option<Tag> {
        if handle.store != self.id {
            return None;
        }
        let slot = self.slots.get(handle.slot as usize)?;
        if slot.generation == handle.generation && slot.value.is_some() {
            Some(Tag::ArrayLive)
        } else {
            Some(Tag::Freed)
        }
    }

    pub(crate) fn get(&self, handle: ArrayHandle, operation: Operation) -> Result<&T, ArrayError> {
        self.check(handle, operation)?;
        self.slots[handle.slot as usize]
            .value
            .as_ref()
            .ok_or(ArrayError::UseAfterFree { operation })
    }

    pub(crate) fn get_mut(
        &mut self,
        handle: ArrayHandle,
        operation: Operation,
    ) -> Result<&mut T, ArrayError> {
        self.check(handle, operation)?;
        self.slots[handle.slot as usize]
            .value
            .as_mut()
            .ok_or(ArrayError::UseAfterFree { operation })
    }

    /// Take the contents out of a live slot. The generation is advanced
    /// before the contents are handed back, so the handle is already
    /// stale when the caller drops them.
    pub(crate) fn remove(&mut self, handle: ArrayHandle) -> Result<T, ArrayError> {
        if self.classify(handle) != Some(Tag::ArrayLive) {
            log::warn!("free: rejected {handle}");
            return Err(ArrayError::DoubleFreeOrInvalid {
                operation: Operation::Free,
            });
        }
        let slot = &mut self.slots[handle.slot as usize];
        slot.generation = slot.generation.next();
        let value = slot
            .value
            .take()
            .ok_or(ArrayError::DoubleFreeOrInvalid {
                operation: Operation::Free,
            })?;
        self.free_list.push(handle.slot);
        Ok(value)
    }

    /// Advance a live slot's generation, keeping its contents, and issue
    /// the replacement handle.
    pub(crate) fn reissue(&mut self, handle: ArrayHandle) -> Result<ArrayHandle, ArrayError> {
        self.check(handle, Operation::Resize)?;
        let slot = &mut self.slots[handle.slot as usize];
        slot.generation = slot.generation.next();
        Ok(ArrayHandle::new(self.id, handle.slot, slot.generation))
    }

    /// Number of live entries.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter_map(|s| s.value.as_ref())
    }

    fn check(&self, handle: ArrayHandle, operation: Operation) -> Result<(), ArrayError> {
        match self.classify(handle) {
            Some(Tag::ArrayLive) => Ok(()),
            Some(_) => {
                log::warn!("{operation}: rejected stale {handle}");
                Err(ArrayError::UseAfterFree { operation })
            }
            None => {
                log::warn!("{operation}: rejected foreign {handle}");
                Err(ArrayError::DoubleFreeOrInvalid { operation })
            }
        }
    }
}
