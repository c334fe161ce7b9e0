//! Generation-checked storage for dense, row-major multi-arrays.
//!
//! An [`ArrayStore`] owns any number of arrays. Each array is a single
//! contiguous, zero-initialised payload plus shape metadata; callers hold
//! `Copy` handles and views that the store validates on every call.
//!
//! # Architecture
//!
//! ```text
//! ArrayStore
//! ├── StoreConfig (bounds checks, payload cap)
//! └── Registry<ArrayData> (slot table, generation per slot)
//!     └── ArrayData { Shape, element_size, Vec<u8> payload }
//!
//! ArrayRef = Array(ArrayHandle) | View(View)
//!     ArrayHandle { store, slot, generation }
//!     View { ArrayHandle, offset, remaining, extent }
//! ```
//!
//! # Handle lifecycle
//!
//! - **allocate** issues a handle at the slot's current generation.
//! - **index** derives views; they carry the same generation.
//! - **resize** moves the payload and advances the generation: the old
//!   handle and all its views classify as [`Tag::Freed`].
//! - **free** advances the generation before releasing the payload.
//!
//! # Bounds checks
//!
//! [`StoreConfig::bounds_checks`] decides whether `index` validates
//! indices against axis sizes. Its default comes from the
//! `bounds-checks` cargo feature. Byte access is always range-checked
//! against the payload, so disabling bounds checks trades error
//! reporting for speed but never permits out-of-buffer access.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
mod element;
pub mod failure;
pub mod handle;
mod resize;
pub mod store;
pub mod tag;
mod transform;
mod view;

// Public re-exports for the primary API surface.
pub use config::StoreConfig;
pub use failure::{catch, finally, OrFatal};
pub use handle::{ArrayHandle, ArrayRef, View};
pub use multiarray_core::{ArrayError, Operation, Shape, MAX_DIMENSIONS};
pub use store::ArrayStore;
pub use tag::Tag;
