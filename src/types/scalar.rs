//! Single runtime-tagged numeric value

use super::{DataType, Element};

/// One element of any numeric kind
///
/// `From` is implemented for each primitive, so `Scalar::from(3i32)` and
/// `3i32.into()` both work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
}

impl Scalar {
    pub fn data_type(self) -> DataType {
        match self {
            Scalar::Int8(_) => DataType::Int8,
            Scalar::Int16(_) => DataType::Int16,
            Scalar::Int32(_) => DataType::Int32,
            Scalar::Int64(_) => DataType::Int64,
            Scalar::Float32(_) => DataType::Float32,
            Scalar::Float64(_) => DataType::Float64,
        }
    }

    /// Extract the value if it is of kind `T`. Never converts.
    pub fn get<T: Element>(self) -> Option<T> {
        T::from_scalar(self)
    }

    fn bits(self) -> u64 {
        match self {
            Scalar::Int8(v) => v.to_bits64(),
            Scalar::Int16(v) => v.to_bits64(),
            Scalar::Int32(v) => v.to_bits64(),
            Scalar::Int64(v) => v.to_bits64(),
            Scalar::Float32(v) => v.to_bits64(),
            Scalar::Float64(v) => v.to_bits64(),
        }
    }

    /// Same kind and identical bit pattern.
    ///
    /// Unlike `==`, NaN equals itself and `0.0` differs from `-0.0`.
    pub fn bit_eq(self, other: Scalar) -> bool {
        self.data_type() == other.data_type() && self.bits() == other.bits()
    }
}
