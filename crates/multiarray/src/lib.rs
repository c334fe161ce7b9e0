//! Multiarray: dense, row-major multi-arrays with generation-checked
//! views and in-place axis resizing.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the sub-crates. For most users, adding `multiarray` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use multiarray::prelude::*;
//!
//! let mut store = ArrayStore::new();
//! let a = store.allocate_for::<i32>(&[2, 3]).unwrap();
//! store.copy_from_slice(a, &[3, 2, 4, 9, 2, 7]).unwrap();
//!
//! // Progressive indexing: row 1, then column 2.
//! let row = store.index(a, 1).unwrap();
//! let elem = store.index(row, 2).unwrap();
//! assert_eq!(store.read::<i32>(elem).unwrap(), 7);
//!
//! // Transpose, then grow the new array's outer axis in place.
//! let t = store.transpose(a).unwrap();
//! assert_eq!(store.get::<i32>(t, &[2, 1]).unwrap(), 7);
//! let t = store.resize(t, 0, 4).unwrap();
//! assert_eq!(store.to_vec::<i32>(t).unwrap(), vec![3, 9, 2, 2, 4, 7, 0, 0]);
//!
//! // Resizing `a` would have invalidated `row`; freeing does too.
//! store.free(a).unwrap();
//! assert!(matches!(
//!     store.index(row, 0),
//!     Err(ArrayError::UseAfterFree { .. })
//! ));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`store`] | `multiarray-store` | `ArrayStore`, handles, views, resize, transpose |
//! | [`types`] | `multiarray-core` | `Shape`, identifiers, `ArrayError` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Array storage, indexing, and resizing (`multiarray-store`).
///
/// Most users only need [`store::ArrayStore`] and the handle types, which
/// are also in the [`prelude`].
pub use multiarray_store as store;

/// Shape arithmetic, identifiers, and error types (`multiarray-core`).
pub use multiarray_core as types;

/// Common imports for typical usage.
///
/// ```rust
/// use multiarray::prelude::*;
/// ```
pub mod prelude {
    // Store and handles
    pub use multiarray_store::{ArrayHandle, ArrayRef, ArrayStore, StoreConfig, Tag, View};

    // Failure contract
    pub use multiarray_store::{catch, finally, OrFatal};

    // Core types
    pub use multiarray_core::{ArrayError, Operation, Shape, MAX_DIMENSIONS};
}
