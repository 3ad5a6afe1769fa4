//! Typed N-dimensional array

use super::{DataType, Element, Scalar, ShapeDescriptor, TypedBuffer};
use crate::error::{NdError, Result};
use log::trace;

/// Shape plus a single-kind buffer of exactly `product(shape)` elements
///
/// Shape and kind are fixed at construction. Elements are laid out in
/// row-major order, so [`raw_buffer`](Self::raw_buffer) is the flat view a
/// storage adapter copies to or from.
#[derive(Debug, Clone, PartialEq)]
pub struct NDArray {
    shape: ShapeDescriptor,
    buffer: TypedBuffer,
}

impl NDArray {
    /// Zero-initialised array of the given shape and kind
    pub fn new(dims: &[usize], dtype: DataType) -> Result<Self> {
        if !dtype.is_numeric() {
            return Err(NdError::UnsupportedDataType(dtype));
        }
        let shape = ShapeDescriptor::new(dims)?;
        let buffer = TypedBuffer::zeros(dtype, shape.size())?;
        trace!("new {:?} array with shape {:?}", dtype, dims);
        Ok(Self { shape, buffer })
    }

    /// Take ownership of flat row-major data
    pub fn from_vec<T: Element>(data: Vec<T>, dims: &[usize]) -> Result<Self> {
        let shape = Self::checked_shape(dims, data.len())?;
        Ok(Self {
            shape,
            buffer: TypedBuffer::from_vec(data),
        })
    }

    /// Copy flat row-major data; the array never aliases `data`
    pub fn from_slice<T: Element>(data: &[T], dims: &[usize]) -> Result<Self> {
        let shape = Self::checked_shape(dims, data.len())?;
        let buffer = TypedBuffer::from_slice(data)?;
        trace!("copied {} {:?} elements into shape {:?}", data.len(), T::DTYPE, dims);
        Ok(Self { shape, buffer })
    }

    pub fn from_buffer(buffer: TypedBuffer, dims: &[usize]) -> Result<Self> {
        let shape = Self::checked_shape(dims, buffer.len())?;
        Ok(Self { shape, buffer })
    }

    fn checked_shape(dims: &[usize], len: usize) -> Result<ShapeDescriptor> {
        let shape = ShapeDescriptor::new(dims)?;
        if shape.size() != len {
            return Err(NdError::ShapeMismatch {
                expected: shape.size(),
                actual: len,
            });
        }
        Ok(shape)
    }

    pub fn data_type(&self) -> DataType {
        self.buffer.data_type()
    }

    /// Copy of the shape
    pub fn shape(&self) -> Vec<usize> {
        self.shape.dims().to_vec()
    }

    pub fn dims(&self) -> &[usize] {
        self.shape.dims()
    }

    pub fn strides(&self) -> &[usize] {
        self.shape.strides()
    }

    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Total number of elements
    pub fn size(&self) -> usize {
        self.shape.size()
    }

    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    pub fn descriptor(&self) -> &ShapeDescriptor {
        &self.shape
    }

    fn check_kind(&self, requested: DataType) -> Result<()> {
        if requested != self.data_type() {
            return Err(NdError::TypeMismatch {
                expected: requested,
                actual: self.data_type(),
            });
        }
        Ok(())
    }

    pub fn get<T: Element>(&self, indices: &[usize]) -> Result<T> {
        self.check_kind(T::DTYPE)?;
        let flat = self.shape.flat_index(indices)?;
        self.buffer.get(flat)
    }

    pub fn set<T: Element>(&mut self, indices: &[usize], value: T) -> Result<()> {
        self.check_kind(T::DTYPE)?;
        let flat = self.shape.flat_index(indices)?;
        self.buffer.set(flat, value)
    }

    pub fn get_scalar(&self, indices: &[usize]) -> Result<Scalar> {
        let flat = self.shape.flat_index(indices)?;
        self.buffer.get_scalar(flat)
    }

    pub fn set_scalar(&mut self, indices: &[usize], value: Scalar) -> Result<()> {
        self.check_kind(value.data_type())?;
        let flat = self.shape.flat_index(indices)?;
        self.buffer.set_scalar(flat, value)
    }

    /// Flat row-major view of all elements, for bulk transfer
    pub fn raw_buffer<T: Element>(&self) -> Result<&[T]> {
        self.buffer.as_slice()
    }

    pub fn raw_buffer_mut<T: Element>(&mut self) -> Result<&mut [T]> {
        self.buffer.as_mut_slice()
    }

    pub fn buffer(&self) -> &TypedBuffer {
        &self.buffer
    }

    pub fn into_buffer(self) -> TypedBuffer {
        self.buffer
    }
}
