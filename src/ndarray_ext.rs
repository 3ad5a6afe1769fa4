//! ndarray integration for nixnd arrays
//!
//! Conversions between [`NDArray`] and ndarray's dynamic-rank arrays.
//!
//! Enable with the `ndarray` feature flag.

use crate::error::{NdError, Result};
use crate::types::{Element, NDArray};
use ndarray::{ArrayD, ArrayViewD, IxDyn};

// =============================================================================
// From ndarray to nixnd
// =============================================================================

impl NDArray {
    /// Create an NDArray from an ndarray ArrayD
    ///
    /// Takes ownership of a standard-layout array without copying elements.
    /// Use `.as_standard_layout().into_owned()` to make other arrays contiguous.
    pub fn from_ndarray<T: Element>(arr: ArrayD<T>) -> Result<Self> {
        if !arr.is_standard_layout() {
            return Err(NdError::NotContiguous);
        }

        let dims = arr.shape().to_vec();
        let len = arr.len();
        if len == 0 {
            return NDArray::new(&dims, T::DTYPE);
        }

        let (mut vec, offset) = arr.into_raw_vec_and_offset();
        let start = offset.ok_or(NdError::NotContiguous)?;

        // standard layout: the elements are vec[start..start + len]
        vec.truncate(start + len);
        vec.drain(..start);
        NDArray::from_vec(vec, &dims)
    }
}

// =============================================================================
// From nixnd to ndarray
// =============================================================================

impl NDArray {
    /// Copy into an owned ndarray ArrayD
    pub fn to_ndarray<T: Element>(&self) -> Result<ArrayD<T>> {
        let data = self.raw_buffer::<T>()?;
        ArrayD::from_shape_vec(IxDyn(self.dims()), data.to_vec()).map_err(|_| {
            NdError::ShapeMismatch {
                expected: self.size(),
                actual: data.len(),
            }
        })
    }

    /// Borrow as an ndarray view (zero-copy)
    pub fn view_ndarray<T: Element>(&self) -> Result<ArrayViewD<'_, T>> {
        let data = self.raw_buffer::<T>()?;
        ArrayViewD::from_shape(IxDyn(self.dims()), data).map_err(|_| NdError::ShapeMismatch {
            expected: self.size(),
            actual: data.len(),
        })
    }
}
