//! Shapes, row-major strides and flat index arithmetic

use crate::error::{NdError, Result};

/// Shape of an N-dimensional array plus its derived row-major strides
///
/// `strides[rank - 1] == 1` and `strides[i] == strides[i + 1] * dims[i + 1]`.
/// A rank-0 shape has no strides and one element; any zero dimension makes
/// the element count zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeDescriptor {
    dims: Vec<usize>,
    strides: Vec<usize>,
    size: usize,
}

impl ShapeDescriptor {
    pub fn new(dims: &[usize]) -> Result<Self> {
        let overflow = || NdError::UnsupportedShape {
            shape: dims
                .iter()
                .map(|&d| i64::try_from(d).unwrap_or(i64::MAX))
                .collect(),
            reason: "element count overflows usize",
        };

        let mut strides = vec![0; dims.len()];
        let mut step = 1usize;
        for axis in (0..dims.len()).rev() {
            strides[axis] = step;
            step = step.checked_mul(dims[axis]).ok_or_else(overflow)?;
        }

        Ok(Self {
            dims: dims.to_vec(),
            strides,
            size: step,
        })
    }

    /// Build from signed extents as they arrive from a managed caller
    pub fn from_signed(dims: &[i64]) -> Result<Self> {
        let unsupported = |reason| NdError::UnsupportedShape {
            shape: dims.to_vec(),
            reason,
        };

        let mut extents = Vec::with_capacity(dims.len());
        for &d in dims {
            if d < 0 {
                return Err(unsupported("negative dimension"));
            }
            extents.push(usize::try_from(d).map_err(|_| unsupported("dimension exceeds usize"))?);
        }
        Self::new(&extents)
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Total number of elements
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Map a multi-dimensional index to its row-major flat offset
    ///
    /// Fails if the index has the wrong number of components or any component
    /// lies outside its dimension.
    pub fn flat_index(&self, indices: &[usize]) -> Result<usize> {
        if indices.len() != self.rank() {
            return Err(NdError::IndexRankMismatch {
                expected: self.rank(),
                actual: indices.len(),
            });
        }

        let mut flat = 0;
        for (axis, ((&index, &bound), &stride)) in indices
            .iter()
            .zip(&self.dims)
            .zip(&self.strides)
            .enumerate()
        {
            if index >= bound {
                return Err(NdError::IndexOutOfRange { axis, index, bound });
            }
            flat += index * stride;
        }
        Ok(flat)
    }

    /// Iterate over every valid index in row-major order
    pub fn indices(&self) -> RowMajorIndices<'_> {
        RowMajorIndices::new(&self.dims)
    }
}

/// Row-major walk over all indices of an extent, last axis fastest
#[derive(Debug, Clone)]
pub struct RowMajorIndices<'a> {
    dims: &'a [usize],
    next: Option<Vec<usize>>,
}

impl<'a> RowMajorIndices<'a> {
    pub fn new(dims: &'a [usize]) -> Self {
        let next = if dims.contains(&0) {
            None
        } else {
            Some(vec![0; dims.len()])
        };
        Self { dims, next }
    }
}

impl Iterator for RowMajorIndices<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;

        let mut succ = current.clone();
        for axis in (0..self.dims.len()).rev() {
            succ[axis] += 1;
            if succ[axis] < self.dims[axis] {
                self.next = Some(succ);
                break;
            }
            succ[axis] = 0;
        }

        Some(current)
    }
}
