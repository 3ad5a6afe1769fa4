//! Array parsing

use crate::error::{NdError, Result};
use crate::types::{DataType, Element, NDArray, ShapeDescriptor, with_element};
use bytes::Buf;

fn decode<T: Element, B: Buf>(buf: &mut B, shape: &ShapeDescriptor) -> Result<NDArray> {
    let mut elements = Vec::with_capacity(shape.size());
    for _ in 0..shape.size() {
        elements.push(T::try_get_le(buf)?);
    }
    NDArray::from_vec(elements, shape.dims())
}

/// Parse an array body (after the header has been consumed)
pub fn parse_array_body<B: Buf>(buf: &mut B) -> Result<NDArray> {
    // Parse dtype
    let tag = buf.try_get_u8()?;
    let dtype = DataType::from_u8(tag)
        .filter(|d| d.is_numeric())
        .ok_or(NdError::InvalidDType(tag))?;

    // Parse rank and shape
    let rank = buf.try_get_u8()?;
    let mut signed = Vec::with_capacity(rank as usize);
    for _ in 0..rank {
        let dim = buf.try_get_u64_le()?;
        signed.push(i64::try_from(dim).unwrap_or(-1));
    }
    let shape = ShapeDescriptor::from_signed(&signed)?;

    // Parse payload
    let data_size = buf.try_get_u64_le()?;
    let expected = (shape.size() as u64)
        .checked_mul(dtype.element_size() as u64)
        .ok_or(NdError::UnsupportedShape {
            shape: signed.clone(),
            reason: "byte size overflows u64",
        })?;
    if data_size != expected {
        return Err(NdError::DataSizeMismatch {
            expected,
            actual: data_size,
        });
    }
    // all payload bytes must be present before the array is allocated
    if (buf.remaining() as u64) < data_size {
        return Err(NdError::UnexpectedEof {
            requested: usize::try_from(data_size).unwrap_or(usize::MAX),
            available: buf.remaining(),
        });
    }

    with_element!(
        dtype,
        |T| { decode::<T, B>(buf, &shape) },
        Err(NdError::InvalidDType(tag))
    )
}
