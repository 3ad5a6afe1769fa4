//! Single-kind owned element storage

use super::{DataType, Element, Scalar, with_element};
use crate::error::{NdError, Result};
use log::trace;

/// Contiguous owned elements of exactly one numeric kind
///
/// The variant is fixed when the buffer is created; no operation changes it.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedBuffer {
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

/// Allocate `len` default (zero) elements, reporting allocation failure
fn alloc_zeroed<T: Element>(len: usize) -> Result<Vec<T>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| NdError::ResourceExhaustion {
            dtype: T::DTYPE,
            len,
        })?;
    data.resize(len, T::default());
    trace!("allocated {} elements of {:?}", len, T::DTYPE);
    Ok(data)
}

impl TypedBuffer {
    /// Zero-initialised buffer of `len` elements of `dtype`
    pub fn zeros(dtype: DataType, len: usize) -> Result<Self> {
        with_element!(
            dtype,
            |T| { alloc_zeroed::<T>(len).map(T::into_buffer) },
            Err(NdError::UnsupportedDataType(dtype))
        )
    }

    /// Take ownership of already-typed data
    pub fn from_vec<T: Element>(data: Vec<T>) -> Self {
        T::into_buffer(data)
    }

    /// Copy caller-owned data into a new buffer
    pub fn from_slice<T: Element>(data: &[T]) -> Result<Self> {
        let mut owned = Vec::new();
        owned
            .try_reserve_exact(data.len())
            .map_err(|_| NdError::ResourceExhaustion {
                dtype: T::DTYPE,
                len: data.len(),
            })?;
        owned.extend_from_slice(data);
        Ok(T::into_buffer(owned))
    }

    pub fn data_type(&self) -> DataType {
        match self {
            TypedBuffer::Int8(_) => DataType::Int8,
            TypedBuffer::Int16(_) => DataType::Int16,
            TypedBuffer::Int32(_) => DataType::Int32,
            TypedBuffer::Int64(_) => DataType::Int64,
            TypedBuffer::Float32(_) => DataType::Float32,
            TypedBuffer::Float64(_) => DataType::Float64,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            TypedBuffer::Int8(v) => v.len(),
            TypedBuffer::Int16(v) => v.len(),
            TypedBuffer::Int32(v) => v.len(),
            TypedBuffer::Int64(v) => v.len(),
            TypedBuffer::Float32(v) => v.len(),
            TypedBuffer::Float64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn mismatch<T: Element>(&self) -> NdError {
        NdError::TypeMismatch {
            expected: T::DTYPE,
            actual: self.data_type(),
        }
    }

    fn out_of_range(&self, index: usize) -> NdError {
        NdError::IndexOutOfRange {
            axis: 0,
            index,
            bound: self.len(),
        }
    }

    /// The whole backing sequence, if it holds kind `T`
    pub fn as_slice<T: Element>(&self) -> Result<&[T]> {
        T::buffer_slice(self).ok_or_else(|| self.mismatch::<T>())
    }

    pub fn as_mut_slice<T: Element>(&mut self) -> Result<&mut [T]> {
        let actual = self.data_type();
        T::buffer_slice_mut(self).ok_or(NdError::TypeMismatch {
            expected: T::DTYPE,
            actual,
        })
    }

    pub fn get<T: Element>(&self, index: usize) -> Result<T> {
        let data = self.as_slice::<T>()?;
        data.get(index)
            .copied()
            .ok_or_else(|| self.out_of_range(index))
    }

    pub fn set<T: Element>(&mut self, index: usize, value: T) -> Result<()> {
        let bound = self.len();
        let slot = self
            .as_mut_slice::<T>()?
            .get_mut(index)
            .ok_or(NdError::IndexOutOfRange {
                axis: 0,
                index,
                bound,
            })?;
        *slot = value;
        Ok(())
    }

    /// Read an element without knowing the kind statically
    pub fn get_scalar(&self, index: usize) -> Result<Scalar> {
        with_element!(
            self.data_type(),
            |T| { self.get::<T>(index).map(T::into_scalar) },
            Err(NdError::UnsupportedDataType(DataType::Nothing))
        )
    }

    /// Write an element whose kind is only known at runtime
    pub fn set_scalar(&mut self, index: usize, value: Scalar) -> Result<()> {
        match value {
            Scalar::Int8(v) => self.set(index, v),
            Scalar::Int16(v) => self.set(index, v),
            Scalar::Int32(v) => self.set(index, v),
            Scalar::Int64(v) => self.set(index, v),
            Scalar::Float32(v) => self.set(index, v),
            Scalar::Float64(v) => self.set(index, v),
        }
    }
}
