use std::io::{Read, Write};

use tracing::{debug, info, instrument};

use crate::eto_pipeline::common::PROGRESS_ROW_INTERVAL;
use crate::eto_pipeline::common::error::{EtoDataError, Result};
use crate::eto_pipeline::gap_fill::stencil::{STENCIL_RADIUS, repaired_value};
use crate::eto_pipeline::gap_fill::window::RowWindow;
use crate::eto_pipeline::mask::{LandMask, Surface};
use crate::eto_pipeline::raster::{FILL_SAMPLE, RasterGeometry, RasterHeader, read_row, write_row};

const OPERATION: &str = "filling missing pixels";

/// Pixel counters of one gap-fill pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PassResult {
    /// Fill pixels replaced by a neighbor average
    pub fixed: u64,
    /// Fill pixels left as they were for lack of valid neighbors
    pub unfixable: u64,
    /// Pixels under water, copied unchanged
    pub water: u64,
}

/// One streaming pass from a container raster to a new container raster of the same size.
pub struct GapFillPass {
    geometry: RasterGeometry,
}

impl GapFillPass {
    pub fn new(geometry: RasterGeometry) -> Self {
        Self { geometry }
    }

    /// Copies `input` to `output` row by row, repairing land fill pixels.
    ///
    /// The input header must be a valid header for the configured geometry. `header` is
    /// written to the output as is, so every pass carries the scaling of the reduction.
    #[instrument(skip(self, input, mask, header, output), fields(width = self.geometry.width, height = self.geometry.height))]
    pub fn run<R, M, W>(
        &self,
        input: &mut R,
        mask: &mut M,
        header: &RasterHeader,
        output: &mut W,
    ) -> Result<PassResult>
    where
        R: Read + ?Sized,
        M: LandMask + ?Sized,
        W: Write + ?Sized,
    {
        let input_header = RasterHeader::read_from(input)?;
        input_header.validate()?;
        input_header.check_dimensions(&self.geometry)?;

        header.write_to(output)?;

        let width = self.geometry.width;
        let height = self.geometry.height;
        let mut window = RowWindow::new(self.geometry.row_len());
        let mut output_row = vec![0u8; self.geometry.row_len()];
        let mut result = PassResult::default();

        // the first advance inside the loop brings row 0 to the center
        for y in 0..STENCIL_RADIUS as u32 {
            window.advance();
            if y < height {
                window.fill_incoming(|buf| read_row(&mut *input, buf, OPERATION, y))?;
            }
        }

        for y in 0..height {
            if y % PROGRESS_ROW_INTERVAL == 0 {
                debug!(row = y, "Filling missing pixels");
            }

            mask.load_row(y)?;

            window.advance();
            let next = y + STENCIL_RADIUS as u32;
            if next < height {
                window.fill_incoming(|buf| read_row(&mut *input, buf, OPERATION, next))?;
            }

            let center = window
                .row(0)
                .ok_or(EtoDataError::UnexpectedEof { operation: OPERATION, row: y })?;

            for (x, (out, &pixel)) in (0..width).zip(output_row.iter_mut().zip(center)) {
                *out = match mask.classify(x) {
                    Surface::Water => {
                        result.water += 1;
                        pixel
                    }
                    Surface::Land if pixel == FILL_SAMPLE => match repaired_value(&window, x, width) {
                        Some(value) => {
                            result.fixed += 1;
                            value
                        }
                        None => {
                            result.unfixable += 1;
                            pixel
                        }
                    },
                    Surface::Land => pixel,
                };
            }

            write_row(output, &output_row, OPERATION, y)?;
        }

        output.flush().map_err(EtoDataError::write_failed(OPERATION))?;
        info!(
            fixed = result.fixed,
            unfixable = result.unfixable,
            water = result.water,
            "Finished filling missing pixels"
        );
        Ok(result)
    }
}
