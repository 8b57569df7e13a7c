//! TIFF preview module
//!
//! Exports a container raster as an 8-bit grayscale TIFF for visual inspection.

mod preview_writer;
pub mod types;

#[cfg(test)]
mod tests;

pub use preview_writer::TiffPreviewWriter;
pub use types::{PreviewConfig, PreviewConfigBuilder};
