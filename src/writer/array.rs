//! Array serialization

use crate::types::{Element, NDArray, with_element};
use std::io::{self, Write};

fn payload<T: Element>(arr: &NDArray) -> io::Result<Vec<u8>> {
    let data = arr.raw_buffer::<T>().map_err(io::Error::other)?;
    let mut out = Vec::with_capacity(data.len() * T::DTYPE.element_size());
    for &v in data {
        v.put_le(&mut out);
    }
    Ok(out)
}

/// Write the array body: dtype, rank, dims, payload length, payload
pub fn write_array<W: Write>(writer: &mut W, arr: &NDArray) -> io::Result<()> {
    let rank = u8::try_from(arr.rank()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("rank {} exceeds the encodable maximum of 255", arr.rank()),
        )
    })?;

    writer.write_all(&[arr.data_type() as u8])?;
    writer.write_all(&[rank])?;
    for &dim in arr.dims() {
        writer.write_all(&(dim as u64).to_le_bytes())?;
    }

    let data = with_element!(arr.data_type(), |T| { payload::<T>(arr)? }, Vec::new());
    writer.write_all(&(data.len() as u64).to_le_bytes())?;
    writer.write_all(&data)?;
    Ok(())
}
