use std::io::{Read, Seek, Write};

use tiff::encoder::colortype::Gray8;
use tiff::encoder::{Compression, TiffEncoder};
use tracing::{debug, instrument};

use crate::eto_pipeline::common::error::{EtoDataError, Result};
use crate::eto_pipeline::raster::{RasterHeader, read_row};
use crate::eto_pipeline::tiff::types::PreviewConfig;

const OPERATION: &str = "exporting TIFF preview";

pub struct TiffPreviewWriter {
    config: PreviewConfig,
}

impl TiffPreviewWriter {
    pub fn new(config: PreviewConfig) -> Self {
        Self { config }
    }

    /// Streams a container raster into an uncompressed grayscale TIFF one strip at a time.
    /// Sample values are written unchanged, fill pixels stay 255.
    ///
    /// `write_strip` stores strip bytes as given, so the encoder must stay
    /// `Compression::Uncompressed`.
    #[instrument(skip(self, input, output))]
    pub fn write_preview<R, W>(&self, input: &mut R, output: W) -> Result<RasterHeader>
    where
        R: Read + ?Sized,
        W: Write + Seek,
    {
        let header = RasterHeader::read_from(input)?;
        header.validate()?;
        debug!("Encoding TIFF preview: {}x{}", header.width, header.height);

        let mut encoder = TiffEncoder::new(output)
            .map_err(|e| EtoDataError::EncodeError(e.to_string()))?
            .with_compression(Compression::Uncompressed);

        let mut image = encoder
            .new_image::<Gray8>(header.width, header.height)
            .map_err(|e| EtoDataError::EncodeError(e.to_string()))?;
        image
            .rows_per_strip(self.config.rows_per_strip)
            .map_err(|e| EtoDataError::EncodeError(e.to_string()))?;

        let width = header.width as usize;
        let mut strip = Vec::new();
        let mut y = 0u32;
        loop {
            let samples = image.next_strip_sample_count() as usize;
            if samples == 0 {
                break;
            }
            strip.resize(samples, 0);
            for row in strip.chunks_exact_mut(width) {
                read_row(input, row, OPERATION, y)?;
                y += 1;
            }
            image
                .write_strip(&strip)
                .map_err(|e| EtoDataError::EncodeError(e.to_string()))?;
        }

        image
            .finish()
            .map_err(|e| EtoDataError::EncodeError(e.to_string()))?;

        debug!("TIFF encoding complete");
        Ok(header)
    }
}
