//! Test fixtures and reference models for multiarray development.
//!
//! - [`fixtures`]: arrays pre-filled with recognisable values.
//! - [`model`]: a plain `Vec`-based model of row-major layout and resize,
//!   used as the oracle in property tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod model;

pub use fixtures::{filled_i32, sequential_values};
pub use model::{coords, row_major_offset, ReferenceArray};
