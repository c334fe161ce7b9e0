//! Resizing one axis in place.
//!
//! Under row-major layout, resizing axis `a` changes the length of every
//! contiguous run that spans axis `a` and all axes inside it, while the
//! number of such runs (the product of the axes before `a`) stays fixed.
//! Shrinking compacts runs front to back; growing first extends the
//! buffer and then spreads runs back to front so no run is overwritten
//! before it has been moved, zero-filling the tail of each.

use multiarray_core::{ArrayError, Operation};

use crate::handle::{ArrayHandle, ArrayRef};
use crate::store::ArrayStore;

impl ArrayStore {
    /// Resize `axis` to `new_size`, preserving every element whose index
    /// along `axis` is below `min(old, new)` and zero-filling new slots.
    ///
    /// A view resolves to its backing array, with `axis` counted from the
    /// view's first unselected axis. On any actual size change the input
    /// handle and every view taken from it become stale; use the returned
    /// handle. Resizing to the current size returns the input handle and
    /// invalidates nothing.
    ///
    /// If the grown buffer cannot be allocated, fails with
    /// [`ArrayError::OutOfMemory`] and leaves the array and its views valid.
    pub fn resize(
        &mut self,
        target: impl Into<ArrayRef>,
        axis: usize,
        new_size: usize,
    ) -> Result<ArrayHandle, ArrayError> {
        let target = target.into();
        let handle = target.handle();
        let (shape, element_size) = {
            let data = self.arrays.get(handle, Operation::Resize)?;
            (data.shape.clone(), data.element_size)
        };
        let rank = shape.rank();
        let axis = match target {
            ArrayRef::Array(_) => axis,
            ArrayRef::View(view) => axis
                .checked_add(rank - view.remaining)
                .ok_or(ArrayError::AxisOutOfRange { axis, rank })?,
        };
        let old_size = shape
            .dim(axis)
            .ok_or(ArrayError::AxisOutOfRange { axis, rank })?;
        if new_size == old_size {
            return Ok(handle);
        }

        let new_shape = shape.with_dim(axis, new_size)?;
        let new_len = self.checked_byte_len(&new_shape, element_size)?;
        let runs = shape.outer_count(axis)?;
        let old_run = shape.extent(axis, element_size)?;
        let new_run = new_shape.extent(axis, element_size)?;

        let data = self.arrays.get_mut(handle, Operation::Resize)?;
        if new_size < old_size {
            compact(&mut data.payload, runs, old_run, new_run, new_len);
        } else {
            expand(&mut data.payload, runs, old_run, new_run, new_len)?;
        }
        data.shape = new_shape;

        let reissued = self.arrays.reissue(handle)?;
        log::debug!(
            "resize: {handle} axis {axis} {old_size} -> {new_size}, reissued as {reissued}"
        );
        Ok(reissued)
    }
}

/// Shrink each `old_run`-byte run to its first `new_run` bytes.
///
/// Run `r` moves to `r * new_run`, which never passes the start of any
/// unread run, so a forward pass is safe. The buffer keeps its capacity.
fn compact(payload: &mut Vec<u8>, runs: usize, old_run: usize, new_run: usize, new_len: usize) {
    for r in 1..runs {
        let src = r * old_run;
        payload.copy_within(src..src + new_run, r * new_run);
    }
    payload.truncate(new_len);
}

/// Grow each `old_run`-byte run to `new_run` bytes, zero-filling the tail.
///
/// Run `r` moves to `r * new_run >= r * old_run`, so runs are moved from
/// the last to the first.
fn expand(
    payload: &mut Vec<u8>,
    runs: usize,
    old_run: usize,
    new_run: usize,
    new_len: usize,
) -> Result<(), ArrayError> {
    payload
        .try_reserve_exact(new_len - payload.len())
        .map_err(|_| ArrayError::OutOfMemory { requested: new_len })?;
    payload.resize(new_len, 0);
    for r in (0..runs).rev() {
        let src = r * old_run;
        let dst = r * new_run;
        payload.copy_within(src..src + old_run, dst);
        payload[dst + old_run..dst + new_run].fill(0);
    }
    Ok(())
}
