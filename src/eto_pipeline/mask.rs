//! Land/water mask module
//!
//! Classifies full-resolution raster coordinates by sampling a coarser mask raster.

mod sampler;
pub mod types;

#[cfg(test)]
mod tests;

pub use sampler::{LandMask, MaskSampler};
pub use types::{LAND_THRESHOLD, Surface};
