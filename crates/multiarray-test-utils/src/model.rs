//! A deliberately naive model of row-major arrays.
//!
//! Everything here works coordinate by coordinate, with no strides or
//! run arithmetic, so it can serve as an independent oracle for the
//! store's indexing and resize engines.

/// Every coordinate of `dims` in row-major order.
pub fn coords(dims: &[usize]) -> Vec<Vec<usize>> {
    let mut out = vec![Vec::new()];
    for &d in dims {
        out = out
            .into_iter()
            .flat_map(|prefix| {
                (0..d).map(move |i| {
                    let mut c = prefix.clone();
                    c.push(i);
                    c
                })
            })
            .collect();
    }
    out
}

/// Linear element index of `coords` within `dims`.
pub fn row_major_offset(dims: &[usize], coords: &[usize]) -> usize {
    assert_eq!(dims.len(), coords.len(), "coordinate rank mismatch");
    dims.iter()
        .zip(coords)
        .fold(0, |acc, (&d, &c)| acc * d + c)
}

/// An `i32` array held as a flat `Vec`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceArray {
    pub dims: Vec<usize>,
    pub values: Vec<i32>,
}

impl ReferenceArray {
    pub fn new(dims: &[usize], values: Vec<i32>) -> Self {
        let n: usize = dims.iter().product();
        assert_eq!(values.len(), n, "value count does not match shape");
        Self {
            dims: dims.to_vec(),
            values,
        }
    }

    pub fn get(&self, coords: &[usize]) -> i32 {
        self.values[row_major_offset(&self.dims, coords)]
    }

    /// The array after resizing `axis` to `new_size`: elements inside both
    /// the old and new bounds keep their value, new slots are zero.
    pub fn resized(&self, axis: usize, new_size: usize) -> Self {
        let mut dims = self.dims.clone();
        dims[axis] = new_size;
        let values = coords(&dims)
            .iter()
            .map(|c| {
                if c[axis] < self.dims[axis] {
                    self.get(c)
                } else {
                    0
                }
            })
            .collect();
        Self { dims, values }
    }

    /// The 2-D transpose.
    pub fn transposed(&self) -> Self {
        assert_eq!(self.dims.len(), 2, "transpose needs two dimensions");
        let dims = vec![self.dims[1], self.dims[0]];
        let values = coords(&dims)
            .iter()
            .map(|c| self.get(&[c[1], c[0]]))
            .collect();
        Self { dims, values }
    }
}
