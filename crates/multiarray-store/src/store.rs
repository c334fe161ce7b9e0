//! The array store: allocation, deallocation, and metadata queries.
//!
//! Each array is one [`ArrayData`]: a validated [`Shape`], an element
//! size, and a single zero-initialised `Vec<u8>` payload of exactly
//! `product(shape) * element_size` bytes. Arrays live in a generation-
//! checked [`Registry`]; callers only ever hold `Copy` handles.

use multiarray_core::{ArrayError, Operation, Shape, StoreId};

use crate::config::StoreConfig;
use crate::handle::{ArrayHandle, ArrayRef, View};
use crate::tag::{Registry, Tag};

/// Contents of one live array.
pub(crate) struct ArrayData {
    pub(crate) shape: Shape,
    pub(crate) element_size: usize,
    pub(crate) payload: Vec<u8>,
}

impl ArrayData {
    /// A view covering the whole payload with every axis still selectable.
    pub(crate) fn root_view(&self, array: ArrayHandle) -> View {
        View {
            array,
            offset: 0,
            remaining: self.shape.rank(),
            extent: self.payload.len(),
        }
    }

    /// Axes a view has not selected yet.
    pub(crate) fn remaining_dims(&self, view: &View) -> &[usize] {
        let dims = self.shape.dims();
        &dims[dims.len() - view.remaining..]
    }
}

/// Owner of a set of multi-arrays.
///
/// All operations take `&self` or `&mut self` on the store and a handle
/// or view identifying the array, so the borrow checker rules out
/// concurrent mutation. Dropping the store releases every array.
pub struct ArrayStore {
    pub(crate) config: StoreConfig,
    pub(crate) arrays: Registry<ArrayData>,
}

impl ArrayStore {
    /// Create an empty store with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            arrays: Registry::new(),
        }
    }

    /// The store's configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The store's unique identity.
    pub fn id(&self) -> StoreId {
        self.arrays.id()
    }

    /// Allocate a zero-filled array.
    ///
    /// `dims` lists the axis sizes, outermost first. Fails with
    /// [`ArrayError::CapacityExceeded`] if the rank exceeds
    /// [`MAX_DIMENSIONS`](multiarray_core::MAX_DIMENSIONS) or the byte
    /// size overflows or exceeds the configured cap, with
    /// [`ArrayError::InvalidShape`] for empty shapes, zero-sized axes, or
    /// a zero element size, and with [`ArrayError::OutOfMemory`] if the
    /// allocator refuses.
    pub fn allocate(
        &mut self,
        dims: &[usize],
        element_size: usize,
    ) -> Result<ArrayHandle, ArrayError> {
        if element_size == 0 {
            return Err(ArrayError::invalid_shape("element size must be non-zero"));
        }
        let shape = Shape::new(dims)?;
        let byte_len = self.checked_byte_len(&shape, element_size)?;
        let payload = zeroed(byte_len)?;
        let handle = self.arrays.insert(ArrayData {
            shape,
            element_size,
            payload,
        })?;
        log::debug!("allocate: {handle} shape {dims:?} x {element_size} bytes");
        Ok(handle)
    }

    /// Allocate a zero-filled array of `T` elements.
    pub fn allocate_for<T: bytemuck::Pod>(
        &mut self,
        dims: &[usize],
    ) -> Result<ArrayHandle, ArrayError> {
        self.allocate(dims, std::mem::size_of::<T>())
    }

    /// Free an array.
    ///
    /// A view frees its whole backing array. Fails with
    /// [`ArrayError::DoubleFreeOrInvalid`] if the array is already freed
    /// (or was resized since the handle was issued) or the handle belongs
    /// to another store.
    pub fn free(&mut self, target: impl Into<ArrayRef>) -> Result<(), ArrayError> {
        let handle = target.into().handle();
        let data = self.arrays.remove(handle)?;
        log::debug!("free: {handle} ({} bytes)", data.payload.len());
        drop(data);
        Ok(())
    }

    /// Classify a handle or view, or `None` if this store never issued it.
    pub fn tag(&self, target: impl Into<ArrayRef>) -> Option<Tag> {
        let target = target.into();
        match (self.arrays.classify(target.handle())?, target) {
            (Tag::ArrayLive, ArrayRef::View(_)) => Some(Tag::ViewLive),
            (tag, _) => Some(tag),
        }
    }

    /// Whether the handle or view can still be used.
    pub fn is_live(&self, target: impl Into<ArrayRef>) -> bool {
        matches!(self.tag(target), Some(Tag::ArrayLive | Tag::ViewLive))
    }

    /// The full shape of an array (or of a view's backing array).
    pub fn shape(&self, target: impl Into<ArrayRef>) -> Result<&Shape, ArrayError> {
        let data = self.arrays.get(target.into().handle(), Operation::Query)?;
        Ok(&data.shape)
    }

    /// Axis sizes still addressable: every axis for an array, the
    /// unselected trailing axes for a view.
    pub fn dims(&self, target: impl Into<ArrayRef>) -> Result<&[usize], ArrayError> {
        let (data, view) = self.resolve(target.into(), Operation::Query)?;
        Ok(data.remaining_dims(&view))
    }

    /// Number of addressable axes (`dims(target).len()`).
    pub fn rank(&self, target: impl Into<ArrayRef>) -> Result<usize, ArrayError> {
        let (_, view) = self.resolve(target.into(), Operation::Query)?;
        Ok(view.remaining)
    }

    /// Element size in bytes.
    pub fn element_size(&self, target: impl Into<ArrayRef>) -> Result<usize, ArrayError> {
        let data = self.arrays.get(target.into().handle(), Operation::Query)?;
        Ok(data.element_size)
    }

    /// Byte length of the payload (array) or of the addressed region (view).
    pub fn byte_len(&self, target: impl Into<ArrayRef>) -> Result<usize, ArrayError> {
        let (_, view) = self.resolve(target.into(), Operation::Query)?;
        Ok(view.extent)
    }

    /// Number of live arrays.
    pub fn live_count(&self) -> usize {
        self.arrays.len()
    }

    /// Heap memory held by live payloads, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.arrays.values().map(|a| a.payload.capacity()).sum()
    }

    /// Look up the backing array of `target` and express the target as a
    /// view (the root view for a whole array).
    pub(crate) fn resolve(
        &self,
        target: ArrayRef,
        operation: Operation,
    ) -> Result<(&ArrayData, View), ArrayError> {
        let data = self.arrays.get(target.handle(), operation)?;
        let view = match target {
            ArrayRef::Array(handle) => data.root_view(handle),
            ArrayRef::View(view) => view,
        };
        Ok((data, view))
    }

    /// Byte size of `shape`, checked against overflow and the payload cap.
    pub(crate) fn checked_byte_len(
        &self,
        shape: &Shape,
        element_size: usize,
    ) -> Result<usize, ArrayError> {
        let byte_len = shape.byte_len(element_size)?;
        if byte_len > self.config.max_payload_bytes {
            return Err(ArrayError::capacity(format!(
                "{byte_len} bytes for shape {shape} exceed the {} byte payload cap",
                self.config.max_payload_bytes
            )));
        }
        Ok(byte_len)
    }
}

impl Default for ArrayStore {
    fn default() -> Self {
        Self::new()
    }
}

/// A zero-filled byte buffer, reporting allocator refusal as an error.
fn zeroed(len: usize) -> Result<Vec<u8>, ArrayError> {
    let mut payload = Vec::new();
    payload
        .try_reserve_exact(len)
        .map_err(|_| ArrayError::OutOfMemory { requested: len })?;
    payload.resize(len, 0);
    Ok(payload)
}
