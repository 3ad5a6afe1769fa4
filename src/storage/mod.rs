//! The seam between arrays and a storage engine
//!
//! A storage engine exposes datasets of a fixed kind and extent. Reads and
//! writes move a count/offset [`Region`] between the dataset and an
//! [`NDArray`] whose shape equals the region's count. The engine only borrows
//! the array for the duration of the call.

mod memory;
mod region;

pub use memory::MemoryStorage;
pub use region::Region;

use crate::error::{NdError, Result};
use crate::types::{DataType, NDArray};

/// Region-wise transfer between a dataset and arrays
pub trait StorageAdapter {
    /// Kind of the stored elements
    fn data_type(&self) -> DataType;

    /// Current dataset extent
    fn extent(&self) -> Vec<usize>;

    /// Fill `dest` with the cells of `region`
    fn read_region(&self, region: &Region, dest: &mut NDArray) -> Result<()>;

    /// Store the cells of `src` at `region`
    fn write_region(&mut self, region: &Region, src: &NDArray) -> Result<()>;

    /// Allocate an array sized to `region` and read into it
    fn read(&self, region: &Region) -> Result<NDArray> {
        region.validate(&self.extent())?;
        let mut dest = NDArray::new(&region.count, self.data_type())?;
        self.read_region(region, &mut dest)?;
        Ok(dest)
    }

    fn read_all(&self) -> Result<NDArray> {
        self.read(&Region::whole(&self.extent()))
    }

    /// Overwrite the whole dataset with `src`
    fn write(&mut self, src: &NDArray) -> Result<()> {
        let region = Region::whole(&self.extent());
        self.write_region(&region, src)
    }
}

/// Validate a transfer of `array` through `region` against a dataset
pub(crate) fn check_transfer(
    region: &Region,
    extent: &[usize],
    dtype: DataType,
    array: &NDArray,
) -> Result<()> {
    region.validate(extent)?;
    if array.dims() != region.count.as_slice() {
        return Err(NdError::InvalidRegion(format!(
            "array shape {:?} does not match region count {:?}",
            array.dims(),
            region.count
        )));
    }
    if array.data_type() != dtype {
        return Err(NdError::TypeMismatch {
            expected: dtype,
            actual: array.data_type(),
        });
    }
    Ok(())
}
