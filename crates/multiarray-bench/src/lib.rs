//! Benchmark profiles for the multiarray workspace.
//!
//! - [`REFERENCE_DIMS`]: a 3-D `64x64x16` `i32` array (256 KiB payload).
//! - [`MATRIX_DIMS`]: a `512x512` `i32` matrix for transpose.
//! - [`reference_profile`]: a store holding a filled reference array.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use multiarray_store::{ArrayHandle, ArrayStore};
use multiarray_test_utils::filled_i32;

/// Shape of the reference array.
pub const REFERENCE_DIMS: [usize; 3] = [64, 64, 16];

/// Shape of the transpose matrix.
pub const MATRIX_DIMS: [usize; 2] = [512, 512];

/// A store holding one `i32` array of shape `dims`, filled with
/// sequential values.
pub fn reference_profile(dims: &[usize]) -> (ArrayStore, ArrayHandle) {
    let mut store = ArrayStore::new();
    let array = filled_i32(&mut store, dims);
    (store, array)
}
