//! Pre-filled arrays for tests and benches.

use multiarray_store::{ArrayHandle, ArrayStore};

/// `1, 2, ..., n` where `n` is the element count of `dims`.
///
/// Starts at 1 so that any zero read back is a zero-filled slot, never
/// preserved data.
pub fn sequential_values(dims: &[usize]) -> Vec<i32> {
    let n: usize = dims.iter().product();
    (1..=n).map(|v| v as i32).collect()
}

/// Allocate an `i32` array of shape `dims` holding [`sequential_values`].
///
/// # Panics
///
/// Panics if the store rejects the shape.
pub fn filled_i32(store: &mut ArrayStore, dims: &[usize]) -> ArrayHandle {
    let array = store
        .allocate_for::<i32>(dims)
        .unwrap_or_else(|e| panic!("fixture allocation of {dims:?} failed: {e}"));
    store
        .copy_from_slice(array, &sequential_values(dims))
        .unwrap_or_else(|e| panic!("fixture fill of {dims:?} failed: {e}"));
    array
}
