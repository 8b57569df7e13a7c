use crate::eto_pipeline::common::error::Result;

const WINDOW_RADIUS: i32 = 2;
const WINDOW_ROWS: usize = 2 * WINDOW_RADIUS as usize + 1;

/// Ring buffer over the input rows `y - 2 ..= y + 2` around the row being written.
///
/// Slots for rows outside the raster are never marked available, so `row` returns `None`
/// for them instead of stale or zeroed data.
pub struct RowWindow {
    slots: [Vec<u8>; WINDOW_ROWS],
    available: [bool; WINDOW_ROWS],
    /// Slot holding offset -2.
    oldest: usize,
}

impl RowWindow {
    pub fn new(width: usize) -> Self {
        Self {
            slots: std::array::from_fn(|_| vec![0u8; width]),
            available: [false; WINDOW_ROWS],
            oldest: 0,
        }
    }

    fn slot(&self, offset: i32) -> usize {
        (self.oldest + (offset + WINDOW_RADIUS) as usize) % WINDOW_ROWS
    }

    /// Row at `offset` from the current row, if it exists in the raster and has been read.
    pub fn row(&self, offset: i32) -> Option<&[u8]> {
        if offset.abs() > WINDOW_RADIUS {
            return None;
        }
        let slot = self.slot(offset);
        self.available[slot].then(|| self.slots[slot].as_slice())
    }

    /// Moves the window down one row. The row at -2 is released and its slot becomes the
    /// unavailable +2 slot until [`RowWindow::fill_incoming`] succeeds.
    pub fn advance(&mut self) {
        self.available[self.oldest] = false;
        self.oldest = (self.oldest + 1) % WINDOW_ROWS;
    }

    /// Reads the row at +2 through `fill` and marks it available.
    pub fn fill_incoming<F>(&mut self, fill: F) -> Result<()>
    where
        F: FnOnce(&mut [u8]) -> Result<()>,
    {
        let slot = self.slot(WINDOW_RADIUS);
        fill(&mut self.slots[slot])?;
        self.available[slot] = true;
        Ok(())
    }
}
