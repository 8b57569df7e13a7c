//! Baseline ETo point lookup
//!
//! Reads single samples of a finished container raster by geographic coordinates.

mod reader;

#[cfg(test)]
mod tests;

pub use reader::{BaselineEtoLookup, GeoCoordinates};
