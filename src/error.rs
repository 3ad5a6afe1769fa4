//! Error types for nixnd

use crate::types::DataType;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, NdError>;

/// Errors raised by shape, buffer, array, region and codec operations.
///
/// Every variant is a precondition failure reported at the call that
/// violated it. Nothing is mutated or allocated before validation passes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NdError {
    /// A dimension was negative or the element count overflowed `usize`
    #[error("unsupported shape {shape:?}: {reason}")]
    UnsupportedShape { shape: Vec<i64>, reason: &'static str },

    /// The requested kind is not one of the six numeric kinds
    #[error("unsupported data type: {0:?}")]
    UnsupportedDataType(DataType),

    /// Literal data length does not match the element count of a shape
    #[error("shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Access through a kind other than the one fixed at construction
    #[error("type mismatch: array holds {actual:?}, accessed as {expected:?}")]
    TypeMismatch { expected: DataType, actual: DataType },

    /// Number of index components differs from the array rank
    #[error("index has {actual} components, array has rank {expected}")]
    IndexRankMismatch { expected: usize, actual: usize },

    /// An index component is outside its dimension
    #[error("index {index} out of range for axis {axis} with extent {bound}")]
    IndexOutOfRange {
        axis: usize,
        index: usize,
        bound: usize,
    },

    /// Allocating the backing buffer failed
    #[error("cannot allocate {len} elements of {dtype:?}")]
    ResourceExhaustion { dtype: DataType, len: usize },

    /// A count/offset region does not fit the storage extent
    #[error("invalid region: {0}")]
    InvalidRegion(String),

    /// An ndarray input is not in standard (contiguous row-major) layout
    #[error("array is not contiguous; call .as_standard_layout().into_owned() first")]
    NotContiguous,

    /// Invalid magic bytes at the start of an encoded array
    #[error("invalid magic bytes, not an encoded nixnd array")]
    InvalidMagic,

    /// Encoded with a format version this build does not read
    #[error("unsupported format version: {0}")]
    UnsupportedVersion(u32),

    /// Unknown or non-numeric dtype tag in an encoded array
    #[error("invalid dtype tag: 0x{0:02X}")]
    InvalidDType(u8),

    /// Input ended before a field could be read
    #[error("unexpected end of input: needed {requested} bytes, {available} available")]
    UnexpectedEof { requested: usize, available: usize },

    /// Encoded payload length disagrees with shape and dtype
    #[error("data size mismatch: expected {expected} bytes, got {actual}")]
    DataSizeMismatch { expected: u64, actual: u64 },
}

impl From<bytes::TryGetError> for NdError {
    fn from(e: bytes::TryGetError) -> Self {
        NdError::UnexpectedEof {
            requested: e.requested,
            available: e.available,
        }
    }
}
