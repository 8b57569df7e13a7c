//! Raster container module
//!
//! The fixed 32-byte header codec, the raster geometry and the scaling metadata shared by
//! the bit-depth reducer and every gap-fill pass.

mod header;
mod row_io;
pub mod types;


pub use header::RasterHeader;
pub(crate) use row_io::{read_row, write_row};
pub use types::{
    FILL_SAMPLE, FORMAT_VERSION, HEADER_SIZE, MAX_REDUCED_SAMPLE, PixelStats, REDUCED_BIT_DEPTH,
    RasterGeometry, SOURCE_FILL_THRESHOLD, is_source_fill,
};
