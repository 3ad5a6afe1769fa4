//! nixnd - Typed N-dimensional arrays for array storage bindings
//!
//! An [`NDArray`] pairs a shape with a buffer holding exactly one of six
//! numeric kinds. It is the unit of exchange between caller code and a
//! storage engine: callers build and fill arrays through indexed access, and
//! storage adapters move their flat row-major buffers to and from count/offset
//! regions of a dataset.
//!
//! # Features
//!
//! - Row-major strides and bounds-checked multi-dimensional indexing
//! - Kind fixed at construction; access through any other kind is an error
//! - Region transfers through the [`StorageAdapter`] trait
//! - Little-endian byte encoding for crossing process or language boundaries
//! - Optional conversions to and from `ndarray` (feature `ndarray`)
//!
//! # Example
//!
//! ```rust
//! use nixnd::{DataType, MemoryStorage, NDArray, Region, StorageAdapter};
//!
//! let mut arr = NDArray::new(&[2, 3], DataType::Float64).unwrap();
//! arr.set(&[1, 2], 4.5f64).unwrap();
//! assert_eq!(arr.get::<f64>(&[1, 2]).unwrap(), 4.5);
//!
//! // Stage it into a larger dataset and read part of it back
//! let mut store = MemoryStorage::new(&[4, 3], DataType::Float64).unwrap();
//! store.write_region(&Region::new(vec![2, 3], vec![2, 0]), &arr).unwrap();
//! let row = store.read(&Region::new(vec![1, 3], vec![3, 0])).unwrap();
//! assert_eq!(row.raw_buffer::<f64>().unwrap(), &[0.0, 0.0, 4.5]);
//! ```

pub mod error;
pub mod parser;
pub mod storage;
pub mod types;
pub mod writer;

#[cfg(feature = "ndarray")]
pub mod ndarray_ext;

// Re-export common types at crate root
pub use error::{NdError, Result};
pub use parser::parse;
pub use storage::{MemoryStorage, Region, StorageAdapter};
pub use types::{
    DataType, Element, HEADER_SIZE, MAGIC, NDArray, RowMajorIndices, Scalar, ShapeDescriptor,
    TypedBuffer, VERSION,
};
