//! Core types for nixnd

mod array;
mod buffer;
mod dtype;
mod header;
mod scalar;
mod shape;

pub use array::NDArray;
pub use buffer::TypedBuffer;
pub(crate) use dtype::with_element;
pub use dtype::{DataType, Element};
pub use header::{HEADER_SIZE, MAGIC, VERSION};
pub use scalar::Scalar;
pub use shape::{RowMajorIndices, ShapeDescriptor};
