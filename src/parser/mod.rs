//! Parser for the encoded array form
//!
//! Decoding copies the payload into a freshly allocated array; the result
//! never borrows from the input bytes.

mod array;

pub use array::parse_array_body;

use crate::error::{NdError, Result};
use crate::types::{HEADER_SIZE, MAGIC, NDArray, VERSION};
use bytes::Buf;
use log::debug;

/// Parse an encoded array from bytes
pub fn parse(bytes: &[u8]) -> Result<NDArray> {
    // Check minimum size for header
    if bytes.len() < HEADER_SIZE {
        return Err(NdError::UnexpectedEof {
            requested: HEADER_SIZE,
            available: bytes.len(),
        });
    }
    let mut buf = bytes;

    // Validate magic bytes
    let mut magic = [0u8; MAGIC.len()];
    buf.try_copy_to_slice(&mut magic)?;
    if &magic != MAGIC {
        return Err(NdError::InvalidMagic);
    }

    // Validate version
    let version = buf.try_get_u32_le()?;
    if version != VERSION {
        return Err(NdError::UnsupportedVersion(version));
    }
    let _flags = buf.try_get_u32_le()?;

    let arr = parse_array_body(&mut buf)?;
    debug!(
        "decoded {:?} array with shape {:?} ({} trailing bytes)",
        arr.data_type(),
        arr.dims(),
        buf.remaining()
    );
    Ok(arr)
}
