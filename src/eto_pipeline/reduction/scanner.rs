use tracing::{debug, info, instrument};

use crate::eto_pipeline::common::PROGRESS_ROW_INTERVAL;
use crate::eto_pipeline::common::error::{EtoDataError, Result};
use crate::eto_pipeline::raster::{PixelStats, RasterGeometry, is_source_fill};
use crate::eto_pipeline::reduction::source::SampleSource;

const OPERATION: &str = "finding pixel range";

/// Computes the range of valid samples of a source raster in one pass, holding one row at a time.
pub struct PixelRangeScanner {
    geometry: RasterGeometry,
}

impl PixelRangeScanner {
    pub fn new(geometry: RasterGeometry) -> Self {
        Self { geometry }
    }

    /// Scans all `width * height` samples. Fill samples are ignored.
    ///
    /// Fails if the source ends early or a read fails; a source holding nothing but
    /// fill samples fails with `NoValidSamples`.
    #[instrument(skip(self, source), fields(width = self.geometry.width, height = self.geometry.height))]
    pub fn scan<S: SampleSource + ?Sized>(&self, source: &mut S) -> Result<PixelStats> {
        let mut min = u16::MAX;
        let mut max = 0u16;
        let mut row = vec![0u16; self.geometry.row_len()];

        for y in 0..self.geometry.height {
            if y % PROGRESS_ROW_INTERVAL == 0 {
                debug!(row = y, "Finding pixel range");
            }

            source
                .read_samples(&mut row)
                .map_err(|e| EtoDataError::row_read(OPERATION, y, e))?;

            for &sample in row.iter().filter(|&&s| !is_source_fill(s)) {
                min = min.min(sample);
                max = max.max(sample);
            }
        }

        let stats = PixelStats::from_range(min, max)?;
        info!(
            min = stats.min,
            max = stats.max,
            reduction_factor = stats.reduction_factor,
            "Found pixel range"
        );
        Ok(stats)
    }
}
