use std::io::Write;

use tracing::{debug, info, instrument};

use crate::eto_pipeline::common::PROGRESS_ROW_INTERVAL;
use crate::eto_pipeline::common::error::{EtoDataError, Result};
use crate::eto_pipeline::raster::{PixelStats, RasterGeometry, RasterHeader, write_row};
use crate::eto_pipeline::reduction::source::SampleSource;

const OPERATION: &str = "reducing bit depth";

/// Converts a 16-bit source raster into an 8-bit container raster.
pub struct BitDepthReducer {
    geometry: RasterGeometry,
}

impl BitDepthReducer {
    pub fn new(geometry: RasterGeometry) -> Self {
        Self { geometry }
    }

    /// Writes the header derived from `stats`, then every source row reduced with
    /// [`PixelStats::reduce`]. Returns the header that was written.
    #[instrument(skip(self, source, stats, output), fields(min = stats.min, max = stats.max))]
    pub fn reduce<S, W>(&self, source: &mut S, stats: &PixelStats, output: &mut W) -> Result<RasterHeader>
    where
        S: SampleSource + ?Sized,
        W: Write + ?Sized,
    {
        let header = RasterHeader::for_reduced(&self.geometry, stats);
        header.write_to(output)?;

        let mut input_row = vec![0u16; self.geometry.row_len()];
        let mut output_row = vec![0u8; self.geometry.row_len()];

        for y in 0..self.geometry.height {
            if y % PROGRESS_ROW_INTERVAL == 0 {
                debug!(row = y, "Reducing bit depth");
            }

            source
                .read_samples(&mut input_row)
                .map_err(|e| EtoDataError::row_read(OPERATION, y, e))?;

            for (reduced, &sample) in output_row.iter_mut().zip(&input_row) {
                *reduced = stats.reduce(sample);
            }

            write_row(output, &output_row, OPERATION, y)?;
        }

        output.flush().map_err(EtoDataError::write_failed(OPERATION))?;
        info!(
            width = self.geometry.width,
            height = self.geometry.height,
            "Finished reducing bit depth"
        );
        Ok(header)
    }
}
