use crate::eto_pipeline::gap_fill::window::RowWindow;
use crate::eto_pipeline::raster::FILL_SAMPLE;

/// Neighborhood radius, the stencil is `(2r + 1)^2` samples.
pub const STENCIL_RADIUS: i32 = 2;

/// A repair needs strictly more neighbor weight than this.
pub const MIN_REPAIR_WEIGHT: u32 = 11;

/// Manhattan taper: 5 at the center down to 1 in the corners.
pub fn neighbor_weight(dx: i32, dy: i32) -> u32 {
    (5 - (dx.abs() + dy.abs())) as u32
}

/// Weighted average of the valid neighbors of column `x` of the window's current row,
/// or `None` when they carry no more than `MIN_REPAIR_WEIGHT`.
pub fn repaired_value(window: &RowWindow, x: u32, width: u32) -> Option<u8> {
    let mut total_weight = 0u32;
    let mut weighted_sum = 0u32;

    for dy in -STENCIL_RADIUS..=STENCIL_RADIUS {
        let Some(row) = window.row(dy) else {
            continue;
        };
        for dx in -STENCIL_RADIUS..=STENCIL_RADIUS {
            let nx = x as i64 + dx as i64;
            if nx < 0 || nx >= width as i64 {
                continue;
            }
            let neighbor = row[nx as usize];
            if neighbor == FILL_SAMPLE {
                continue;
            }
            let weight = neighbor_weight(dx, dy);
            total_weight += weight;
            weighted_sum += weight * neighbor as u32;
        }
    }

    (total_weight > MIN_REPAIR_WEIGHT).then(|| (weighted_sum / total_weight) as u8)
}
