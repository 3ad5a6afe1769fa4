//! In-memory dataset implementing [`StorageAdapter`]

use super::region::{Strided, copy_block};
use super::{Region, StorageAdapter, check_transfer};
use crate::error::{NdError, Result};
use crate::types::{DataType, NDArray, with_element};
use log::debug;

/// A dataset held entirely in memory
///
/// Useful as a staging area and as a reference for engine adapters.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryStorage {
    data: NDArray,
}

impl MemoryStorage {
    /// Zero-filled dataset
    pub fn new(extent: &[usize], dtype: DataType) -> Result<Self> {
        Ok(Self {
            data: NDArray::new(extent, dtype)?,
        })
    }

    pub fn from_array(data: NDArray) -> Self {
        Self { data }
    }

    pub fn as_array(&self) -> &NDArray {
        &self.data
    }

    pub fn into_array(self) -> NDArray {
        self.data
    }

    /// Resize the dataset, keeping the overlapping cells
    ///
    /// Cells outside the old extent are zero. The rank cannot change.
    pub fn set_extent(&mut self, extent: &[usize]) -> Result<()> {
        if extent.len() != self.data.rank() {
            return Err(NdError::InvalidRegion(format!(
                "cannot change rank from {} to {}",
                self.data.rank(),
                extent.len()
            )));
        }

        let mut resized = NDArray::new(extent, self.data.data_type())?;
        let overlap: Vec<usize> = self
            .data
            .dims()
            .iter()
            .zip(extent)
            .map(|(&old, &new)| old.min(new))
            .collect();
        let origin = vec![0; extent.len()];
        let dst_strides = resized.strides().to_vec();

        with_element!(
            self.data.data_type(),
            |T| {
                copy_block::<T>(
                    Strided {
                        data: self.data.raw_buffer::<T>()?,
                        strides: self.data.strides(),
                        origin: &origin,
                    },
                    Strided {
                        data: resized.raw_buffer_mut::<T>()?,
                        strides: &dst_strides,
                        origin: &origin,
                    },
                    &overlap,
                )
            },
            return Err(NdError::UnsupportedDataType(DataType::Nothing))
        );

        debug!("extent changed from {:?} to {:?}", self.data.dims(), extent);
        self.data = resized;
        Ok(())
    }
}

impl StorageAdapter for MemoryStorage {
    fn data_type(&self) -> DataType {
        self.data.data_type()
    }

    fn extent(&self) -> Vec<usize> {
        self.data.shape()
    }

    fn read_region(&self, region: &Region, dest: &mut NDArray) -> Result<()> {
        check_transfer(region, self.data.dims(), self.data.data_type(), dest)?;
        debug!("reading region {:?} at {:?}", region.count, region.offset);

        let origin = vec![0; region.rank()];
        let dst_strides = dest.strides().to_vec();
        with_element!(
            self.data.data_type(),
            |T| {
                copy_block::<T>(
                    Strided {
                        data: self.data.raw_buffer::<T>()?,
                        strides: self.data.strides(),
                        origin: &region.offset,
                    },
                    Strided {
                        data: dest.raw_buffer_mut::<T>()?,
                        strides: &dst_strides,
                        origin: &origin,
                    },
                    &region.count,
                );
                Ok(())
            },
            Err(NdError::UnsupportedDataType(DataType::Nothing))
        )
    }

    fn write_region(&mut self, region: &Region, src: &NDArray) -> Result<()> {
        check_transfer(region, self.data.dims(), self.data.data_type(), src)?;
        debug!("writing region {:?} at {:?}", region.count, region.offset);

        let origin = vec![0; region.rank()];
        let dst_strides = self.data.strides().to_vec();
        with_element!(
            self.data.data_type(),
            |T| {
                copy_block::<T>(
                    Strided {
                        data: src.raw_buffer::<T>()?,
                        strides: src.strides(),
                        origin: &origin,
                    },
                    Strided {
                        data: self.data.raw_buffer_mut::<T>()?,
                        strides: &dst_strides,
                        origin: &region.offset,
                    },
                    &region.count,
                );
                Ok(())
            },
            Err(NdError::UnsupportedDataType(DataType::Nothing))
        )
    }
}
