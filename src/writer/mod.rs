//! Serialization of arrays to the little-endian byte form

mod array;

pub use array::write_array;

use crate::types::{MAGIC, NDArray, VERSION};
use log::debug;
use std::io::{self, Write};

/// Write an array, header included
pub fn write<W: Write>(writer: &mut W, arr: &NDArray) -> io::Result<()> {
    // Write header
    writer.write_all(MAGIC)?;
    writer.write_all(&VERSION.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?; // flags (reserved)

    write_array(writer, arr)?;
    debug!(
        "encoded {:?} array with shape {:?}",
        arr.data_type(),
        arr.dims()
    );
    Ok(())
}

/// Write an array to bytes
pub fn to_bytes(arr: &NDArray) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    write(&mut buf, arr)?;
    Ok(buf)
}
