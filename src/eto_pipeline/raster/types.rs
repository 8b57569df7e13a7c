//! Raster geometry and scaling types

use crate::eto_pipeline::common::error::{EtoDataError, Result};

/// Size of the container header in bytes. Unused trailing bytes are zero.
pub const HEADER_SIZE: usize = 32;

/// Container format version written by this pipeline.
pub const FORMAT_VERSION: u8 = 1;

/// Bits per sample of every container raster.
pub const REDUCED_BIT_DEPTH: u8 = 8;

/// Reduced sample value meaning "no data".
pub const FILL_SAMPLE: u8 = 255;

/// Largest magnitude a reduced sample can hold.
pub const MAX_REDUCED_SAMPLE: u8 = FILL_SAMPLE - 1;

/// Source samples above this value are fill pixels.
pub const SOURCE_FILL_THRESHOLD: u16 = 65528;

/// Source samples are in units of 0.1 mm.
const SOURCE_UNIT_MM: f64 = 0.1;
const MM_PER_INCH: f64 = 25.4;

pub fn is_source_fill(sample: u16) -> bool {
    sample > SOURCE_FILL_THRESHOLD
}

/// Dimensions of the main raster and of the land/water mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterGeometry {
    /// Width of the main raster in samples
    pub width: u32,
    /// Height of the main raster in samples
    pub height: u32,
    /// Width of the mask raster in samples
    pub mask_width: u32,
    /// Height of the mask raster in samples
    pub mask_height: u32,
}

impl Default for RasterGeometry {
    fn default() -> Self {
        Self {
            width: 43200,
            height: 16800,
            mask_width: 10800,
            mask_height: 5400,
        }
    }
}

impl RasterGeometry {
    pub fn new(width: u32, height: u32, mask_width: u32, mask_height: u32) -> Self {
        Self { width, height, mask_width, mask_height }
    }

    /// Rejects empty rasters and masks whose width does not evenly divide the raster width.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(EtoDataError::InvalidGeometry(format!(
                "raster dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.mask_width == 0 || self.mask_height == 0 {
            return Err(EtoDataError::InvalidGeometry(format!(
                "mask dimensions must be non-zero, got {}x{}",
                self.mask_width, self.mask_height
            )));
        }
        if self.width % self.mask_width != 0 {
            return Err(EtoDataError::InvalidGeometry(format!(
                "raster width {} is not an integer multiple of mask width {}",
                self.width, self.mask_width
            )));
        }
        Ok(())
    }

    pub fn row_len(&self) -> usize {
        self.width as usize
    }

    pub fn sample_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Number of raster samples covered by one mask sample, along either axis.
    pub fn mask_ratio(&self) -> u32 {
        self.width / self.mask_width
    }

    /// Mask samples above the main raster's northern edge; the mask covers 10 more
    /// degrees of latitude out of 180.
    pub fn cropped_top_pixels(&self) -> u64 {
        self.mask_width as u64 * self.mask_height as u64 * 10 / 180
    }

    /// Byte offset into the mask file of the mask row covering raster row `y`.
    pub fn mask_row_offset(&self, y: u32) -> u64 {
        (y / self.mask_ratio()) as u64 * self.mask_width as u64 + self.cropped_top_pixels()
    }
}

/// Range of valid source samples and the factor that maps it onto 8 bits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelStats {
    pub min: u16,
    pub max: u16,
    /// `(max - min + 1) / 256`
    pub reduction_factor: f64,
}

impl PixelStats {
    /// Fails with `NoValidSamples` when `max < min`, which is what a scan of a raster made
    /// only of fill samples yields.
    pub fn from_range(min: u16, max: u16) -> Result<Self> {
        if max < min {
            return Err(EtoDataError::NoValidSamples);
        }
        let reduction_factor = (max - min) as f64 + 1.0;
        Ok(Self {
            min,
            max,
            reduction_factor: reduction_factor / 256.0,
        })
    }

    /// Maps a 16-bit source sample to its 8-bit reduced value.
    ///
    /// Fill samples become `FILL_SAMPLE`. Valid samples are floored into `[0, 254]`; the
    /// maximum sample would otherwise land on 255 once the range spans more than 255 values.
    pub fn reduce(&self, sample: u16) -> u8 {
        if is_source_fill(sample) {
            return FILL_SAMPLE;
        }
        let steps = sample.saturating_sub(self.min) as f64 / self.reduction_factor;
        steps.floor().min(MAX_REDUCED_SAMPLE as f64) as u8
    }

    /// Physical value of the minimum sample, in inches.
    pub fn min_eto(&self) -> f32 {
        (self.min as f64 * SOURCE_UNIT_MM / MM_PER_INCH) as f32
    }

    /// Inches per reduced sample step.
    pub fn scaling_factor(&self) -> f32 {
        (SOURCE_UNIT_MM * self.reduction_factor / MM_PER_INCH) as f32
    }
}
