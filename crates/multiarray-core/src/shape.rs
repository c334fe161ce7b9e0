//! Array shapes and overflow-checked byte arithmetic.
//!
//! Axes are numbered row-major: axis 0 is the outermost (slowest-varying)
//! dimension, the last axis is contiguous in memory. All size and stride
//! computations go through checked multiplication so that a shape whose
//! byte size does not fit in `usize` is rejected instead of wrapping.

use smallvec::SmallVec;
use std::fmt;

use crate::error::ArrayError;

/// Maximum number of axes an array may have.
pub const MAX_DIMENSIONS: usize = 5;

/// Per-axis sizes, stored inline up to [`MAX_DIMENSIONS`].
pub type Dims = SmallVec<[usize; MAX_DIMENSIONS]>;

/// The validated shape of an array.
///
/// A `Shape` always has between 1 and [`MAX_DIMENSIONS`] axes, each of
/// non-zero size. It does not know the element size; byte quantities are
/// computed by passing one in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Dims,
}

impl Shape {
    /// Validate `dims` and build a shape.
    ///
    /// Fails with [`ArrayError::InvalidShape`] for an empty list or a
    /// zero-sized axis, and with [`ArrayError::CapacityExceeded`] for more
    /// than [`MAX_DIMENSIONS`] axes.
    pub fn new(dims: &[usize]) -> Result<Self, ArrayError> {
        if dims.is_empty() {
            return Err(ArrayError::invalid_shape("at least one axis is required"));
        }
        if dims.len() > MAX_DIMENSIONS {
            return Err(ArrayError::capacity(format!(
                "{} dimensions exceed MAX_DIMENSIONS ({MAX_DIMENSIONS})",
                dims.len()
            )));
        }
        if let Some(axis) = dims.iter().position(|&d| d == 0) {
            return Err(ArrayError::invalid_shape(format!("axis {axis} has size 0")));
        }
        Ok(Self {
            dims: SmallVec::from_slice(dims),
        })
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Per-axis sizes, outermost first.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Size of one axis, or `None` if `axis >= rank`.
    pub fn dim(&self, axis: usize) -> Option<usize> {
        self.dims.get(axis).copied()
    }

    /// Total payload size in bytes for elements of `element_size` bytes.
    pub fn byte_len(&self, element_size: usize) -> Result<usize, ArrayError> {
        checked_product(element_size, &self.dims)
    }

    /// Byte distance between consecutive indices along `axis`.
    ///
    /// Equals `element_size` times the product of every axis strictly
    /// after `axis`; the last axis has stride `element_size`.
    pub fn stride(&self, axis: usize, element_size: usize) -> Result<usize, ArrayError> {
        self.check_axis(axis)?;
        checked_product(element_size, &self.dims[axis + 1..])
    }

    /// Byte length of one contiguous block spanning `axis` and every axis
    /// inside it.
    ///
    /// `extent(0)` is the whole payload, `extent(rank)` is one element.
    /// Equivalently, `extent(axis + 1) == stride(axis)`.
    pub fn extent(&self, axis: usize, element_size: usize) -> Result<usize, ArrayError> {
        if axis > self.rank() {
            return Err(ArrayError::AxisOutOfRange {
                axis,
                rank: self.rank(),
            });
        }
        checked_product(element_size, &self.dims[axis..])
    }

    /// Number of blocks of [`extent(axis)`](Shape::extent) in the payload,
    /// i.e. the product of every axis strictly before `axis`.
    pub fn outer_count(&self, axis: usize) -> Result<usize, ArrayError> {
        self.check_axis(axis)?;
        checked_product(1, &self.dims[..axis])
    }

    /// A copy of this shape with one axis replaced.
    pub fn with_dim(&self, axis: usize, size: usize) -> Result<Self, ArrayError> {
        self.check_axis(axis)?;
        if size == 0 {
            return Err(ArrayError::invalid_shape(format!(
                "axis {axis} cannot be resized to 0"
            )));
        }
        let mut dims = self.dims.clone();
        dims[axis] = size;
        Ok(Self { dims })
    }

    fn check_axis(&self, axis: usize) -> Result<(), ArrayError> {
        if axis >= self.rank() {
            return Err(ArrayError::AxisOutOfRange {
                axis,
                rank: self.rank(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                f.write_str("x")?;
            }
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

fn checked_product(start: usize, dims: &[usize]) -> Result<usize, ArrayError> {
    dims.iter()
        .try_fold(start, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| {
            ArrayError::capacity(format!(
                "the byte size of {dims:?} x {start} overflows usize"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_preserves_dims() {
        let s = Shape::new(&[2, 3, 4]).unwrap();
        assert_eq!(s.rank(), 3);
        assert_eq!(s.dims(), &[2, 3, 4]);
        assert_eq!(s.dim(1), Some(3));
        assert_eq!(s.dim(3), None);
    }

    #[test]
    fn empty_shape_is_invalid() {
        assert!(matches!(
            Shape::new(&[]),
            Err(ArrayError::InvalidShape { .. })
        ));
    }

    #[test]
    fn zero_axis_is_invalid() {
        let err = Shape::new(&[2, 0, 4]).unwrap_err();
        assert_eq!(err, ArrayError::invalid_shape("axis 1 has size 0"));
    }

    #[test]
    fn too_many_dimensions_exceeds_capacity() {
        let dims = [1; MAX_DIMENSIONS + 1];
        assert!(matches!(
            Shape::new(&dims),
            Err(ArrayError::CapacityExceeded { .. })
        ));
        assert!(Shape::new(&[1; MAX_DIMENSIONS]).is_ok());
    }

    #[test]
    fn strides_are_row_major() {
        let s = Shape::new(&[2, 3, 4]).unwrap();
        assert_eq!(s.stride(0, 8).unwrap(), 3 * 4 * 8);
        assert_eq!(s.stride(1, 8).unwrap(), 4 * 8);
        assert_eq!(s.stride(2, 8).unwrap(), 8);
        assert!(matches!(
            s.stride(3, 8),
            Err(ArrayError::AxisOutOfRange { axis: 3, rank: 3 })
        ));
    }

    #[test]
    fn extent_brackets_the_payload() {
        let s = Shape::new(&[2, 3, 4]).unwrap();
        assert_eq!(s.extent(0, 4).unwrap(), s.byte_len(4).unwrap());
        assert_eq!(s.extent(1, 4).unwrap(), s.stride(0, 4).unwrap());
        assert_eq!(s.extent(3, 4).unwrap(), 4);
        assert!(s.extent(4, 4).is_err());
    }

    #[test]
    fn outer_count_multiplies_leading_axes() {
        let s = Shape::new(&[2, 3, 4]).unwrap();
        assert_eq!(s.outer_count(0).unwrap(), 1);
        assert_eq!(s.outer_count(2).unwrap(), 6);
    }

    #[test]
    fn byte_len_overflow_is_capacity_exceeded() {
        let s = Shape::new(&[usize::MAX, 2]).unwrap();
        assert!(matches!(
            s.byte_len(1),
            Err(ArrayError::CapacityExceeded { .. })
        ));
        let s = Shape::new(&[usize::MAX / 2 + 1]).unwrap();
        assert!(s.byte_len(2).is_err());
        assert!(s.byte_len(1).is_ok());
    }

    #[test]
    fn with_dim_replaces_one_axis() {
        let s = Shape::new(&[2, 3]).unwrap();
        let t = s.with_dim(0, 5).unwrap();
        assert_eq!(t.dims(), &[5, 3]);
        assert_eq!(s.dims(), &[2, 3]);
        assert!(matches!(
            s.with_dim(0, 0),
            Err(ArrayError::InvalidShape { .. })
        ));
        assert!(matches!(
            s.with_dim(2, 1),
            Err(ArrayError::AxisOutOfRange { .. })
        ));
    }

    #[test]
    fn display_joins_with_x() {
        assert_eq!(Shape::new(&[2, 3, 4]).unwrap().to_string(), "2x3x4");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_dims() -> impl Strategy<Value = Vec<usize>> {
            proptest::collection::vec(1usize..16, 1..=MAX_DIMENSIONS)
        }

        proptest! {
            #[test]
            fn dims_round_trip(dims in arb_dims()) {
                let s = Shape::new(&dims).unwrap();
                prop_assert_eq!(s.dims(), dims.as_slice());
                prop_assert_eq!(s.rank(), dims.len());
            }

            #[test]
            fn stride_times_dim_is_outer_extent(
                dims in arb_dims(),
                element_size in 1usize..16,
            ) {
                let s = Shape::new(&dims).unwrap();
                for axis in 0..s.rank() {
                    let stride = s.stride(axis, element_size).unwrap();
                    prop_assert_eq!(stride * dims[axis], s.extent(axis, element_size).unwrap());
                    prop_assert_eq!(
                        s.outer_count(axis).unwrap() * s.extent(axis, element_size).unwrap(),
                        s.byte_len(element_size).unwrap()
                    );
                }
            }
        }
    }
}
