//! Bit-depth reduction module
//!
//! Two streaming passes over the 16-bit source raster: a range scan, then the conversion
//! into an 8-bit container raster.

mod source;
mod scanner;
mod reducer;


pub use source::{LittleEndianSampleSource, SampleSource};
pub use scanner::PixelRangeScanner;
pub use reducer::BitDepthReducer;
