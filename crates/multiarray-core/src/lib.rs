//! Core types for the multiarray workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the pieces every other crate agrees on: store and generation
//! identifiers, [`Shape`] with its overflow-checked byte arithmetic,
//! and the [`ArrayError`] taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod shape;

pub use error::{ArrayError, Operation};
pub use id::{Generation, StoreId};
pub use shape::{Dims, Shape, MAX_DIMENSIONS};
