//! Strides and progressive indexing.
//!
//! Indexing selects one axis at a time. Selecting index `i` of the next
//! axis of a region of `extent` bytes over an axis of size `n` yields a
//! region of `extent / n` bytes starting `i * (extent / n)` bytes further
//! in. Repeating this `k` times addresses the same byte as direct
//! `k`-axis row-major addressing, without building any intermediate
//! structure.

use std::ops::Range;

use multiarray_core::{ArrayError, Operation};

use crate::handle::{ArrayRef, View};
use crate::store::{ArrayData, ArrayStore};

impl ArrayStore {
    /// Byte distance between consecutive indices along `axis`.
    ///
    /// `axis` is absolute: a view resolves to its backing array's shape.
    pub fn stride(&self, target: impl Into<ArrayRef>, axis: usize) -> Result<usize, ArrayError> {
        let data = self.arrays.get(target.into().handle(), Operation::Query)?;
        data.shape.stride(axis, data.element_size)
    }

    /// The view covering a whole array. Indexing it is the same as
    /// indexing the array.
    pub fn view(&self, target: impl Into<ArrayRef>) -> Result<View, ArrayError> {
        let (_, view) = self.resolve(target.into(), Operation::Index)?;
        Ok(view)
    }

    /// Select index `i` of the next unselected axis.
    ///
    /// Fails with [`ArrayError::OverIndexed`] on a single-element view,
    /// [`ArrayError::UseAfterFree`] on a stale handle, and (when bounds
    /// checks are enabled) [`ArrayError::IndexOutOfRange`] if `i` is not
    /// below the axis size.
    pub fn index(&self, target: impl Into<ArrayRef>, i: usize) -> Result<View, ArrayError> {
        let (data, view) = self.resolve(target.into(), Operation::Index)?;
        let selected = select(data, &view, i, self.config.bounds_checks)?;
        log::trace!("index: {view} [{i}] -> {selected}");
        Ok(selected)
    }

    /// Select several axes in order; `index_at(a, &[i, j])` is
    /// `index(index(a, i), j)`. An empty list yields the whole target.
    pub fn index_at(
        &self,
        target: impl Into<ArrayRef>,
        coords: &[usize],
    ) -> Result<View, ArrayError> {
        let (data, mut view) = self.resolve(target.into(), Operation::Index)?;
        for &i in coords {
            view = select(data, &view, i, self.config.bounds_checks)?;
        }
        Ok(view)
    }

    /// Address of the first addressable byte: the payload base for an
    /// array, base plus offset for a view.
    ///
    /// The pointer is invalidated by any resize or free of the array.
    pub fn as_ptr(&self, target: impl Into<ArrayRef>) -> Result<*const u8, ArrayError> {
        let (data, view) = self.resolve(target.into(), Operation::Access)?;
        Ok(data.payload.as_ptr().wrapping_add(view.offset))
    }

    /// The bytes of the addressed region.
    pub fn bytes(&self, target: impl Into<ArrayRef>) -> Result<&[u8], ArrayError> {
        let (data, view) = self.resolve(target.into(), Operation::Access)?;
        let range = region(data, &view)?;
        Ok(&data.payload[range])
    }

    /// Mutable bytes of the addressed region.
    pub fn bytes_mut(&mut self, target: impl Into<ArrayRef>) -> Result<&mut [u8], ArrayError> {
        let target = target.into();
        let data = self.arrays.get_mut(target.handle(), Operation::Access)?;
        let view = match target {
            ArrayRef::Array(handle) => data.root_view(handle),
            ArrayRef::View(view) => view,
        };
        let range = region(data, &view)?;
        Ok(&mut data.payload[range])
    }
}

/// One indexing step.
fn select(data: &ArrayData, view: &View, i: usize, bounds_checks: bool) -> Result<View, ArrayError> {
    if view.remaining == 0 {
        return Err(ArrayError::OverIndexed);
    }
    let dims = data.shape.dims();
    let axis = dims.len() - view.remaining;
    let size = dims[axis];
    let out_of_range = ArrayError::IndexOutOfRange {
        axis,
        index: i,
        size,
    };
    if bounds_checks && i >= size {
        return Err(out_of_range);
    }
    let extent = view.extent / size;
    let offset = i
        .checked_mul(extent)
        .and_then(|delta| view.offset.checked_add(delta))
        .ok_or(out_of_range)?;
    Ok(View {
        array: view.array,
        offset,
        remaining: view.remaining - 1,
        extent,
    })
}

/// Byte range of a view, verified to lie inside the payload.
fn region(data: &ArrayData, view: &View) -> Result<Range<usize>, ArrayError> {
    let payload_len = data.payload.len();
    match view.offset.checked_add(view.extent) {
        Some(end) if end <= payload_len => Ok(view.offset..end),
        _ => Err(ArrayError::RegionOutOfBounds {
            offset: view.offset,
            len: view.extent,
            payload_len,
        }),
    }
}
