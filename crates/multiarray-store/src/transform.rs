//! Shape-changing copies built on progressive indexing.

use multiarray_core::{ArrayError, Operation};

use crate::handle::{ArrayHandle, ArrayRef};
use crate::store::ArrayStore;

impl ArrayStore {
    /// Allocate the transpose of a 2-dimensional array or view.
    ///
    /// The result has shape `[cols, rows]`, the same element size, and
    /// `result[i][j] == source[j][i]`. The source is left untouched.
    /// Fails with [`ArrayError::DimensionMismatch`] for any other rank.
    pub fn transpose(&mut self, source: impl Into<ArrayRef>) -> Result<ArrayHandle, ArrayError> {
        let source = source.into();
        let (data, view) = self.resolve(source, Operation::Transpose)?;
        let (rows, cols) = match *data.remaining_dims(&view) {
            [rows, cols] => (rows, cols),
            ref dims => {
                return Err(ArrayError::DimensionMismatch {
                    expected: 2,
                    actual: dims.len(),
                })
            }
        };
        let element_size = data.element_size;

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(view.extent)
            .map_err(|_| ArrayError::OutOfMemory {
                requested: view.extent,
            })?;
        for i in 0..cols {
            for j in 0..rows {
                let element = self.index_at(view, &[j, i])?;
                buffer.extend_from_slice(self.bytes(element)?);
            }
        }

        let result = self.allocate(&[cols, rows], element_size)?;
        self.bytes_mut(result)?.copy_from_slice(&buffer);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transpose_swaps_axes() {
        let mut store = ArrayStore::new();
        let a = store.allocate_for::<i32>(&[2, 3]).unwrap();
        store.copy_from_slice(a, &[3, 2, 4, 9, 2, 7]).unwrap();

        let t = store.transpose(a).unwrap();
        assert_eq!(store.dims(t).unwrap(), &[3, 2]);
        assert_eq!(store.get::<i32>(t, &[1, 0]).unwrap(), 2);
        assert_eq!(store.get::<i32>(t, &[2, 1]).unwrap(), 7);
        for i in 0..3 {
            for j in 0..2 {
                assert_eq!(
                    store.get::<i32>(t, &[i, j]).unwrap(),
                    store.get::<i32>(a, &[j, i]).unwrap()
                );
            }
        }
        assert!(store.is_live(a));
    }

    #[test]
    fn transpose_of_plane_view() {
        let mut store = ArrayStore::new();
        let a = store.allocate_for::<u8>(&[2, 2, 3]).unwrap();
        store
            .copy_from_slice(a, &[0u8, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11])
            .unwrap();
        let plane = store.index(a, 1).unwrap();
        let t = store.transpose(plane).unwrap();
        assert_eq!(store.dims(t).unwrap(), &[3, 2]);
        assert_eq!(store.to_vec::<u8>(t).unwrap(), vec![6, 9, 7, 10, 8, 11]);
    }

    #[test]
    fn transpose_requires_two_dimensions() {
        let mut store = ArrayStore::new();
        let a = store.allocate(&[2, 3, 4], 1).unwrap();
        assert_eq!(
            store.transpose(a),
            Err(ArrayError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        );
        assert_eq!(store.live_count(), 1);
    }

    #[test]
    fn transpose_of_freed_array_fails() {
        let mut store = ArrayStore::new();
        let a = store.allocate(&[2, 3], 1).unwrap();
        store.free(a).unwrap();
        assert_eq!(
            store.transpose(a),
            Err(ArrayError::UseAfterFree {
                operation: Operation::Transpose
            })
        );
    }
}
