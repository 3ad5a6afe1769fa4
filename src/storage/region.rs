//! Count/offset regions and strided region copies

use crate::error::{NdError, Result};
use crate::types::{Element, RowMajorIndices};

/// Hyper-rectangular sub-region of a dataset
///
/// `offset` is the first cell, `count` the extent along each axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region {
    pub count: Vec<usize>,
    pub offset: Vec<usize>,
}

impl Region {
    pub fn new(count: Vec<usize>, offset: Vec<usize>) -> Self {
        Self { count, offset }
    }

    /// Region covering a whole extent
    pub fn whole(extent: &[usize]) -> Self {
        Self {
            count: extent.to_vec(),
            offset: vec![0; extent.len()],
        }
    }

    pub fn rank(&self) -> usize {
        self.count.len()
    }

    /// Number of cells in the region
    pub fn size(&self) -> Result<usize> {
        self.count
            .iter()
            .try_fold(1usize, |acc, &n| acc.checked_mul(n))
            .ok_or_else(|| {
                NdError::InvalidRegion(format!("cell count of {:?} overflows usize", self.count))
            })
    }

    /// Check that the region lies inside `extent`
    pub fn validate(&self, extent: &[usize]) -> Result<()> {
        if self.count.len() != self.offset.len() {
            return Err(NdError::InvalidRegion(format!(
                "count has rank {} but offset has rank {}",
                self.count.len(),
                self.offset.len()
            )));
        }
        if self.count.len() != extent.len() {
            return Err(NdError::InvalidRegion(format!(
                "region has rank {} but extent {:?} has rank {}",
                self.count.len(),
                extent,
                extent.len()
            )));
        }
        for (axis, ((&count, &offset), &bound)) in
            self.count.iter().zip(&self.offset).zip(extent).enumerate()
        {
            let end = offset.checked_add(count);
            if end.is_none_or(|end| end > bound) {
                return Err(NdError::InvalidRegion(format!(
                    "axis {}: offset {} + count {} exceeds extent {}",
                    axis, offset, count, bound
                )));
            }
        }
        Ok(())
    }
}

fn flat_offset(strides: &[usize], origin: &[usize], index: &[usize]) -> usize {
    strides
        .iter()
        .zip(origin)
        .zip(index)
        .map(|((&stride, &o), &i)| (o + i) * stride)
        .sum()
}

/// One side of a strided copy: flat data, its strides, and the region origin
pub(crate) struct Strided<'a, S> {
    pub data: S,
    pub strides: &'a [usize],
    pub origin: &'a [usize],
}

/// Copy a `count`-shaped block between two row-major buffers
///
/// Both sides must already be validated to contain the block.
pub(crate) fn copy_block<T: Element>(
    src: Strided<'_, &[T]>,
    dst: Strided<'_, &mut [T]>,
    count: &[usize],
) {
    for index in RowMajorIndices::new(count) {
        let from = flat_offset(src.strides, src.origin, &index);
        let to = flat_offset(dst.strides, dst.origin, &index);
        dst.data[to] = src.data[from];
    }
}
