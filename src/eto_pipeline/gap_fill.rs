//! Gap filling module
//!
//! Repairs land pixels holding the fill sample with a distance-weighted average of their
//! valid neighbors, streaming the raster through a five-row window.

mod window;
mod stencil;
mod pass;


pub use window::RowWindow;
pub use stencil::{MIN_REPAIR_WEIGHT, STENCIL_RADIUS, neighbor_weight, repaired_value};
pub use pass::{GapFillPass, PassResult};
