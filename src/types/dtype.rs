//! Numeric kinds and the element trait binding them to Rust primitives

use super::{Scalar, TypedBuffer};
use bytes::{Buf, BufMut};
use std::fmt::Debug;

/// Numeric kind of an array's elements
///
/// `Nothing` stands for "no kind chosen yet" at the binding boundary. It is
/// never the kind of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DataType {
    Nothing = 0x00,
    Int8 = 0x01,
    Int16 = 0x02,
    Int32 = 0x03,
    Int64 = 0x04,
    Float32 = 0x05,
    Float64 = 0x06,
}

impl DataType {
    /// The six kinds a buffer can hold
    pub const NUMERIC: [DataType; 6] = [
        DataType::Int8,
        DataType::Int16,
        DataType::Int32,
        DataType::Int64,
        DataType::Float32,
        DataType::Float64,
    ];

    /// Size in bytes of a single element (0 for `Nothing`)
    pub fn element_size(self) -> usize {
        match self {
            DataType::Nothing => 0,
            DataType::Int8 => 1,
            DataType::Int16 => 2,
            DataType::Int32 | DataType::Float32 => 4,
            DataType::Int64 | DataType::Float64 => 8,
        }
    }

    pub fn is_numeric(self) -> bool {
        self != DataType::Nothing
    }

    /// Try to convert from u8 tag
    pub fn from_u8(tag: u8) -> Option<Self> {
        match tag {
            0x00 => Some(DataType::Nothing),
            0x01 => Some(DataType::Int8),
            0x02 => Some(DataType::Int16),
            0x03 => Some(DataType::Int32),
            0x04 => Some(DataType::Int64),
            0x05 => Some(DataType::Float32),
            0x06 => Some(DataType::Float64),
            _ => None,
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A Rust primitive that can be stored in a [`TypedBuffer`]
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `f32` and `f64` only. Each
/// implementation knows which buffer variant it lives in, so generic code
/// (index arithmetic, region copies, the byte codec) is written once and
/// instantiated per kind.
pub trait Element:
    sealed::Sealed + Copy + Default + PartialEq + Debug + Send + Sync + 'static
{
    const DTYPE: DataType;

    /// Borrow the backing slice if `buf` holds this kind
    fn buffer_slice(buf: &TypedBuffer) -> Option<&[Self]>;

    fn buffer_slice_mut(buf: &mut TypedBuffer) -> Option<&mut [Self]>;

    fn into_buffer(data: Vec<Self>) -> TypedBuffer;

    fn into_scalar(self) -> Scalar;

    fn from_scalar(value: Scalar) -> Option<Self>;

    /// Raw bit pattern, widened to 64 bits
    fn to_bits64(self) -> u64;

    /// Append as little-endian bytes
    fn put_le<B: BufMut>(self, out: &mut B);

    /// Read one little-endian element, advancing `buf`
    fn try_get_le<B: Buf>(buf: &mut B) -> Result<Self, bytes::TryGetError>;
}

macro_rules! impl_element {
    ($t:ty, $variant:ident, $put:ident, $get:ident, $bits:expr) => {
        impl sealed::Sealed for $t {}

        impl Element for $t {
            const DTYPE: DataType = DataType::$variant;

            fn buffer_slice(buf: &TypedBuffer) -> Option<&[Self]> {
                match buf {
                    TypedBuffer::$variant(data) => Some(data),
                    _ => None,
                }
            }

            fn buffer_slice_mut(buf: &mut TypedBuffer) -> Option<&mut [Self]> {
                match buf {
                    TypedBuffer::$variant(data) => Some(data),
                    _ => None,
                }
            }

            fn into_buffer(data: Vec<Self>) -> TypedBuffer {
                TypedBuffer::$variant(data)
            }

            fn into_scalar(self) -> Scalar {
                Scalar::$variant(self)
            }

            fn from_scalar(value: Scalar) -> Option<Self> {
                match value {
                    Scalar::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn to_bits64(self) -> u64 {
                let bits: fn($t) -> u64 = $bits;
                bits(self)
            }

            fn put_le<B: BufMut>(self, out: &mut B) {
                out.$put(self);
            }

            fn try_get_le<B: Buf>(buf: &mut B) -> Result<Self, bytes::TryGetError> {
                buf.$get()
            }
        }

        impl From<$t> for Scalar {
            fn from(v: $t) -> Self {
                Scalar::$variant(v)
            }
        }
    };
}

impl_element!(i8, Int8, put_i8, try_get_i8, |v| v as u8 as u64);
impl_element!(i16, Int16, put_i16_le, try_get_i16_le, |v| v as u16 as u64);
impl_element!(i32, Int32, put_i32_le, try_get_i32_le, |v| v as u32 as u64);
impl_element!(i64, Int64, put_i64_le, try_get_i64_le, |v| v as u64);
impl_element!(f32, Float32, put_f32_le, try_get_f32_le, |v| v.to_bits() as u64);
impl_element!(f64, Float64, put_f64_le, try_get_f64_le, |v| v.to_bits());

/// Run `$body` with `$T` aliased to the primitive for a runtime kind.
///
/// `Nothing` evaluates `$nothing` instead.
macro_rules! with_element {
    ($dtype:expr, |$T:ident| $body:block, $nothing:expr) => {
        match $dtype {
            $crate::types::DataType::Int8 => {
                type $T = i8;
                $body
            }
            $crate::types::DataType::Int16 => {
                type $T = i16;
                $body
            }
            $crate::types::DataType::Int32 => {
                type $T = i32;
                $body
            }
            $crate::types::DataType::Int64 => {
                type $T = i64;
                $body
            }
            $crate::types::DataType::Float32 => {
                type $T = f32;
                $body
            }
            $crate::types::DataType::Float64 => {
                type $T = f64;
                $body
            }
            $crate::types::DataType::Nothing => $nothing,
        }
    };
}

pub(crate) use with_element;
