//! Property tests: the store against the coordinate-wise reference model.

use multiarray_store::{ArrayStore, Tag, MAX_DIMENSIONS};
use multiarray_test_utils::{coords, filled_i32, row_major_offset, sequential_values, ReferenceArray};
use proptest::prelude::*;

fn arb_dims() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(1usize..6, 1..=MAX_DIMENSIONS)
}

/// A shape, an axis of it, and a new size for that axis.
fn arb_resize() -> impl Strategy<Value = (Vec<usize>, usize, usize)> {
    arb_dims().prop_flat_map(|dims| {
        let rank = dims.len();
        (Just(dims), 0..rank, 1usize..8)
    })
}

proptest! {
    #[test]
    fn allocated_shape_round_trips(
        dims in arb_dims(),
        element_size in 1usize..16,
    ) {
        let mut store = ArrayStore::new();
        let a = store.allocate(&dims, element_size).unwrap();
        prop_assert_eq!(store.dims(a).unwrap(), dims.as_slice());
        prop_assert_eq!(store.element_size(a).unwrap(), element_size);
        let n: usize = dims.iter().product();
        prop_assert_eq!(store.byte_len(a).unwrap(), n * element_size);
    }

    #[test]
    fn progressive_indexing_matches_row_major_offset(dims in arb_dims()) {
        let mut store = ArrayStore::new();
        let a = filled_i32(&mut store, &dims);
        for c in coords(&dims) {
            let mut view = store.view(a).unwrap();
            for &i in &c {
                view = store.index(view, i).unwrap();
            }
            prop_assert!(view.is_element());
            prop_assert_eq!(view.offset(), row_major_offset(&dims, &c) * 4);
            prop_assert_eq!(
                store.read::<i32>(view).unwrap(),
                row_major_offset(&dims, &c) as i32 + 1
            );
        }
    }

    #[test]
    fn resize_matches_reference_model((dims, axis, new_size) in arb_resize()) {
        let mut store = ArrayStore::new();
        let a = filled_i32(&mut store, &dims);
        let expected = ReferenceArray::new(&dims, sequential_values(&dims)).resized(axis, new_size);

        let b = store.resize(a, axis, new_size).unwrap();
        prop_assert_eq!(store.dims(b).unwrap(), expected.dims.as_slice());
        prop_assert_eq!(store.to_vec::<i32>(b).unwrap(), expected.values);
        prop_assert_eq!(store.live_count(), 1);

        if new_size == dims[axis] {
            prop_assert_eq!(a, b);
        } else {
            prop_assert_eq!(store.tag(a), Some(Tag::Freed));
        }
    }

    #[test]
    fn resize_through_view_matches_absolute_axis(
        (dims, axis, new_size) in arb_resize(),
        depth in 0usize..MAX_DIMENSIONS,
    ) {
        let depth = depth.min(axis);
        let mut store = ArrayStore::new();
        let a = filled_i32(&mut store, &dims);
        let view = store.index_at(a, &vec![0; depth]).unwrap();
        let expected = ReferenceArray::new(&dims, sequential_values(&dims)).resized(axis, new_size);

        let b = store.resize(view, axis - depth, new_size).unwrap();
        prop_assert_eq!(store.to_vec::<i32>(b).unwrap(), expected.values);
    }

    #[test]
    fn transpose_matches_reference_model(rows in 1usize..8, cols in 1usize..8) {
        let mut store = ArrayStore::new();
        let a = filled_i32(&mut store, &[rows, cols]);
        let expected = ReferenceArray::new(&[rows, cols], sequential_values(&[rows, cols])).transposed();

        let t = store.transpose(a).unwrap();
        prop_assert_eq!(store.dims(t).unwrap(), expected.dims.as_slice());
        prop_assert_eq!(store.to_vec::<i32>(t).unwrap(), expected.values);
    }
}
