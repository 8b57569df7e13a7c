use std::io::{Read, Seek, SeekFrom};

use tracing::trace;

use crate::eto_pipeline::common::error::{EtoDataError, Result};
use crate::eto_pipeline::mask::types::Surface;
use crate::eto_pipeline::raster::RasterGeometry;

/// Per-row land/water classification of the main raster.
pub trait LandMask {
    /// Makes the mask row covering raster row `y` current.
    fn load_row(&mut self, y: u32) -> Result<()>;

    /// Classification of column `x` of the row last passed to `load_row`.
    fn classify(&self, x: u32) -> Surface;
}

/// Mask raster of `mask_width * mask_height` bytes, read one row per raster row.
///
/// The main raster starts `cropped_top_pixels` mask samples into the mask, and one mask
/// sample covers `mask_ratio` raster samples along both axes.
pub struct MaskSampler<R: Read + Seek> {
    reader: R,
    geometry: RasterGeometry,
    row: Vec<u8>,
    offset: Option<u64>,
}

impl<R: Read + Seek> MaskSampler<R> {
    pub fn new(reader: R, geometry: RasterGeometry) -> Result<Self> {
        geometry.validate()?;
        Ok(Self {
            reader,
            geometry,
            row: vec![0u8; geometry.mask_width as usize],
            offset: None,
        })
    }

    /// Byte offset of the row currently loaded.
    pub fn current_offset(&self) -> Option<u64> {
        self.offset
    }
}

impl<R: Read + Seek> LandMask for MaskSampler<R> {
    fn load_row(&mut self, y: u32) -> Result<()> {
        let offset = self.geometry.mask_row_offset(y);
        trace!(row = y, offset, "Reading mask row");

        self.reader
            .seek(SeekFrom::Start(offset))
            .and_then(|_| self.reader.read_exact(&mut self.row))
            .map_err(|source| EtoDataError::MaskRead { offset, source })?;

        self.offset = Some(offset);
        Ok(())
    }

    fn classify(&self, x: u32) -> Surface {
        Surface::from_mask_sample(self.row[(x / self.geometry.mask_ratio()) as usize])
    }
}
