//! Typed element reads and writes.
//!
//! Payloads are byte buffers with no alignment guarantee, so values are
//! copied in and out with `bytemuck` rather than reinterpreted in place.
//! The requested type must be exactly the array's element size.

use bytemuck::Pod;

use multiarray_core::{ArrayError, Operation};

use crate::handle::ArrayRef;
use crate::store::ArrayStore;

impl ArrayStore {
    /// Read the first element of the addressed region.
    pub fn read<T: Pod>(&self, target: impl Into<ArrayRef>) -> Result<T, ArrayError> {
        let target = target.into();
        let size = self.checked_element_size::<T>(target)?;
        let bytes = self.bytes(target)?;
        Ok(bytemuck::pod_read_unaligned(&bytes[..size]))
    }

    /// Overwrite the first element of the addressed region.
    pub fn write<T: Pod>(&mut self, target: impl Into<ArrayRef>, value: T) -> Result<(), ArrayError> {
        let target = target.into();
        let size = self.checked_element_size::<T>(target)?;
        self.bytes_mut(target)?[..size].copy_from_slice(bytemuck::bytes_of(&value));
        Ok(())
    }

    /// Read the element at `coords`, selected from `target` one axis at a time.
    pub fn get<T: Pod>(
        &self,
        target: impl Into<ArrayRef>,
        coords: &[usize],
    ) -> Result<T, ArrayError> {
        let view = self.index_at(target, coords)?;
        self.read(view)
    }

    /// Write the element at `coords`.
    pub fn set<T: Pod>(
        &mut self,
        target: impl Into<ArrayRef>,
        coords: &[usize],
        value: T,
    ) -> Result<(), ArrayError> {
        let view = self.index_at(target, coords)?;
        self.write(view, value)
    }

    /// Copy every element of the addressed region out, in row-major order.
    pub fn to_vec<T: Pod>(&self, target: impl Into<ArrayRef>) -> Result<Vec<T>, ArrayError> {
        let target = target.into();
        let size = self.checked_element_size::<T>(target)?;
        let bytes = self.bytes(target)?;
        Ok(bytes
            .chunks_exact(size)
            .map(bytemuck::pod_read_unaligned)
            .collect())
    }

    /// Overwrite the addressed region with `values`, which must hold
    /// exactly as many elements as the region.
    pub fn copy_from_slice<T: Pod>(
        &mut self,
        target: impl Into<ArrayRef>,
        values: &[T],
    ) -> Result<(), ArrayError> {
        let target = target.into();
        let size = self.checked_element_size::<T>(target)?;
        let bytes = self.bytes_mut(target)?;
        let expected = bytes.len() / size;
        if values.len() != expected {
            return Err(ArrayError::LengthMismatch {
                expected,
                actual: values.len(),
            });
        }
        bytes.copy_from_slice(bytemuck::cast_slice(values));
        Ok(())
    }

    fn checked_element_size<T: Pod>(&self, target: ArrayRef) -> Result<usize, ArrayError> {
        let data = self.arrays.get(target.handle(), Operation::Access)?;
        let actual = std::mem::size_of::<T>();
        if actual != data.element_size {
            return Err(ArrayError::ElementSizeMismatch {
                expected: data.element_size,
                actual,
            });
        }
        Ok(actual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let mut store = ArrayStore::new();
        let a = store.allocate_for::<i32>(&[2, 3]).unwrap();
        store.set(a, &[1, 2], -7i32).unwrap();
        assert_eq!(store.get::<i32>(a, &[1, 2]).unwrap(), -7);
        assert_eq!(store.get::<i32>(a, &[0, 0]).unwrap(), 0);
    }

    #[test]
    fn read_on_row_view_reads_first_element() {
        let mut store = ArrayStore::new();
        let a = store.allocate_for::<u16>(&[2, 2]).unwrap();
        store.copy_from_slice(a, &[1u16, 2, 3, 4]).unwrap();
        let row = store.index(a, 1).unwrap();
        assert_eq!(store.read::<u16>(row).unwrap(), 3);
    }

    #[test]
    fn to_vec_follows_row_major_order() {
        let mut store = ArrayStore::new();
        let a = store.allocate_for::<f32>(&[2, 2]).unwrap();
        store.set(a, &[0, 1], 1.5f32).unwrap();
        store.set(a, &[1, 0], 2.5f32).unwrap();
        assert_eq!(store.to_vec::<f32>(a).unwrap(), vec![0.0, 1.5, 2.5, 0.0]);
        let row = store.index(a, 1).unwrap();
        assert_eq!(store.to_vec::<f32>(row).unwrap(), vec![2.5, 0.0]);
    }

    #[test]
    fn wrong_type_size_is_rejected() {
        let mut store = ArrayStore::new();
        let a = store.allocate_for::<i32>(&[2]).unwrap();
        assert_eq!(
            store.get::<u8>(a, &[0]),
            Err(ArrayError::ElementSizeMismatch {
                expected: 4,
                actual: 1
            })
        );
        assert!(store.set(a, &[0], 1u64).is_err());
    }

    #[test]
    fn copy_from_slice_checks_length() {
        let mut store = ArrayStore::new();
        let a = store.allocate_for::<i32>(&[3]).unwrap();
        assert_eq!(
            store.copy_from_slice(a, &[1i32, 2]),
            Err(ArrayError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(store.to_vec::<i32>(a).unwrap(), vec![0, 0, 0]);
    }
}
