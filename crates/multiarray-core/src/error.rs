//! Error types for multi-array operations.
//!
//! Every failure the store can report is a variant of [`ArrayError`].
//! Handle-misuse variants carry the [`Operation`] that detected them so
//! the diagnostic names the call site, e.g. `index: handle already freed`.

use std::error::Error;
use std::fmt;

/// The store operation that detected a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Allocating a new array.
    Allocate,
    /// Releasing an array.
    Free,
    /// Selecting one axis of an array or view.
    Index,
    /// Obtaining the address or bytes of an array or view.
    Access,
    /// Reading shape metadata.
    Query,
    /// Resizing one axis.
    Resize,
    /// Building a transposed copy.
    Transpose,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Allocate => "allocate",
            Self::Free => "free",
            Self::Index => "index",
            Self::Access => "access",
            Self::Query => "query",
            Self::Resize => "resize",
            Self::Transpose => "transpose",
        };
        f.write_str(name)
    }
}

/// Errors from allocation, indexing, resizing, and freeing multi-arrays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Shape or byte-size arithmetic would overflow, the rank exceeds
    /// [`MAX_DIMENSIONS`](crate::MAX_DIMENSIONS), or the payload would
    /// exceed the store's configured cap.
    CapacityExceeded {
        /// Human-readable description of the limit that was hit.
        reason: String,
    },
    /// The allocator refused a request.
    OutOfMemory {
        /// Number of bytes requested.
        requested: usize,
    },
    /// The handle refers to an array that has been freed or resized.
    UseAfterFree {
        /// The operation that received the stale handle.
        operation: Operation,
    },
    /// A free of an already-freed array, or a handle the store never issued.
    DoubleFreeOrInvalid {
        /// The operation that received the handle.
        operation: Operation,
    },
    /// A view with no remaining dimensions was indexed again.
    OverIndexed,
    /// An operation that needs a specific rank was given another.
    DimensionMismatch {
        /// Rank the operation requires.
        expected: usize,
        /// Rank of the argument.
        actual: usize,
    },
    /// An index is not below the size of the axis it selects.
    IndexOutOfRange {
        /// Absolute axis number.
        axis: usize,
        /// The rejected index.
        index: usize,
        /// Size of that axis.
        size: usize,
    },
    /// An axis number is not below the array's rank.
    AxisOutOfRange {
        /// The rejected axis.
        axis: usize,
        /// Rank of the array.
        rank: usize,
    },
    /// A shape or size argument is structurally invalid (empty shape,
    /// zero-sized axis, zero element size).
    InvalidShape {
        /// Description of the problem.
        reason: String,
    },
    /// A typed access used a type whose size differs from the element size.
    ElementSizeMismatch {
        /// Element size of the array in bytes.
        expected: usize,
        /// Size of the requested type in bytes.
        actual: usize,
    },
    /// A bulk copy supplied a different number of elements than the
    /// region holds.
    LengthMismatch {
        /// Number of elements in the region.
        expected: usize,
        /// Number of elements supplied.
        actual: usize,
    },
    /// A view addresses bytes outside its array's payload. Only reachable
    /// with bounds checks disabled.
    RegionOutOfBounds {
        /// Byte offset of the region.
        offset: usize,
        /// Byte length of the region.
        len: usize,
        /// Byte length of the payload.
        payload_len: usize,
    },
}

impl ArrayError {
    /// Shorthand for a [`ArrayError::CapacityExceeded`] with the given reason.
    pub fn capacity(reason: impl Into<String>) -> Self {
        Self::CapacityExceeded {
            reason: reason.into(),
        }
    }

    /// Shorthand for a [`ArrayError::InvalidShape`] with the given reason.
    pub fn invalid_shape(reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { reason } => write!(f, "capacity exceeded: {reason}"),
            Self::OutOfMemory { requested } => {
                write!(f, "out of memory: allocation of {requested} bytes failed")
            }
            Self::UseAfterFree { operation } => write!(f, "{operation}: handle already freed"),
            Self::DoubleFreeOrInvalid { operation } => {
                write!(f, "{operation}: already freed or not an array or view")
            }
            Self::OverIndexed => {
                write!(f, "index: indexed more times than there are dimensions")
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "expected a {expected}-dimensional array, got {actual}")
            }
            Self::IndexOutOfRange { axis, index, size } => {
                write!(f, "index: {index} out of range {size} in dimension {axis}")
            }
            Self::AxisOutOfRange { axis, rank } => {
                write!(f, "axis {axis} out of range for a {rank}-dimensional array")
            }
            Self::InvalidShape { reason } => write!(f, "invalid shape: {reason}"),
            Self::ElementSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "element size mismatch: array holds {expected}-byte elements, \
                     requested type is {actual} bytes"
                )
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "region holds {expected} elements, {actual} supplied")
            }
            Self::RegionOutOfBounds {
                offset,
                len,
                payload_len,
            } => {
                write!(
                    f,
                    "region {offset}..{} lies outside the {payload_len}-byte payload",
                    offset.saturating_add(*len)
                )
            }
        }
    }
}

impl Error for ArrayError {}
