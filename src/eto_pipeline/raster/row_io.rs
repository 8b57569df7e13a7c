use std::io::{Read, Write};

use crate::eto_pipeline::common::error::{EtoDataError, Result};

/// Fills `buf` with one full row, or fails with the row's context.
pub(crate) fn read_row<R: Read + ?Sized>(
    reader: &mut R,
    buf: &mut [u8],
    operation: &'static str,
    row: u32,
) -> Result<()> {
    reader
        .read_exact(buf)
        .map_err(|e| EtoDataError::row_read(operation, row, e))
}

pub(crate) fn write_row<W: Write + ?Sized>(
    writer: &mut W,
    buf: &[u8],
    operation: &'static str,
    row: u32,
) -> Result<()> {
    writer
        .write_all(buf)
        .map_err(|source| EtoDataError::RowWrite { operation, row, source })
}
