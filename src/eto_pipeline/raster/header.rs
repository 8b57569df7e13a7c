use std::io::{Read, Write};

use crate::eto_pipeline::common::error::{EtoDataError, Result};
use crate::eto_pipeline::raster::types::{
    FILL_SAMPLE, FORMAT_VERSION, HEADER_SIZE, PixelStats, REDUCED_BIT_DEPTH, RasterGeometry,
};

const OFFSET_VERSION: usize = 0;
const OFFSET_WIDTH: usize = 1;
const OFFSET_HEIGHT: usize = 5;
const OFFSET_BIT_DEPTH: usize = 9;
const OFFSET_MIN_ETO: usize = 10;
const OFFSET_SCALING_FACTOR: usize = 14;

/// Container header. Multi-byte fields are big-endian on disk regardless of host order.
///
/// | Offset | Field          | Type |
/// |--------|----------------|------|
/// | 0      | version        | u8   |
/// | 1      | width          | u32  |
/// | 5      | height         | u32  |
/// | 9      | bit depth      | u8   |
/// | 10     | minimum ETo    | f32  |
/// | 14     | scaling factor | f32  |
/// | 18..32 | reserved, zero |      |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterHeader {
    pub version: u8,
    /// Width of the raster in samples
    pub width: u32,
    /// Height of the raster in samples
    pub height: u32,
    pub bit_depth: u8,
    /// ETo represented by sample value 0, in inches/year
    pub min_eto: f32,
    /// ETo increase per sample step, in inches/year
    pub scaling_factor: f32,
}

impl RasterHeader {
    /// Header of a reduced raster with the given geometry and source range.
    pub fn for_reduced(geometry: &RasterGeometry, stats: &PixelStats) -> Self {
        Self {
            version: FORMAT_VERSION,
            width: geometry.width,
            height: geometry.height,
            bit_depth: REDUCED_BIT_DEPTH,
            min_eto: stats.min_eto(),
            scaling_factor: stats.scaling_factor(),
        }
    }

    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[OFFSET_VERSION] = self.version;
        buf[OFFSET_WIDTH..OFFSET_WIDTH + 4].copy_from_slice(&self.width.to_be_bytes());
        buf[OFFSET_HEIGHT..OFFSET_HEIGHT + 4].copy_from_slice(&self.height.to_be_bytes());
        buf[OFFSET_BIT_DEPTH] = self.bit_depth;
        buf[OFFSET_MIN_ETO..OFFSET_MIN_ETO + 4].copy_from_slice(&self.min_eto.to_be_bytes());
        buf[OFFSET_SCALING_FACTOR..OFFSET_SCALING_FACTOR + 4]
            .copy_from_slice(&self.scaling_factor.to_be_bytes());
        buf
    }

    /// Encodes into the first `HEADER_SIZE` bytes of `buf`.
    pub fn encode_into(&self, buf: &mut [u8]) -> Result<()> {
        if buf.len() < HEADER_SIZE {
            return Err(EtoDataError::HeaderTooShort(buf.len()));
        }
        buf[..HEADER_SIZE].copy_from_slice(&self.encode());
        Ok(())
    }

    /// Decodes the header fields without validating them, see [`RasterHeader::validate`].
    pub fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() < HEADER_SIZE {
            return Err(EtoDataError::HeaderTooShort(buf.len()));
        }
        Ok(Self {
            version: buf[OFFSET_VERSION],
            width: u32::from_be_bytes(be_word(buf, OFFSET_WIDTH)),
            height: u32::from_be_bytes(be_word(buf, OFFSET_HEIGHT)),
            bit_depth: buf[OFFSET_BIT_DEPTH],
            min_eto: f32::from_be_bytes(be_word(buf, OFFSET_MIN_ETO)),
            scaling_factor: f32::from_be_bytes(be_word(buf, OFFSET_SCALING_FACTOR)),
        })
    }

    /// Checks that this pipeline knows how to read the raster body.
    pub fn validate(&self) -> Result<()> {
        if self.version != FORMAT_VERSION {
            return Err(EtoDataError::UnsupportedVersion(self.version));
        }
        if self.bit_depth != REDUCED_BIT_DEPTH {
            return Err(EtoDataError::UnsupportedBitDepth(self.bit_depth));
        }
        Ok(())
    }

    pub fn check_dimensions(&self, geometry: &RasterGeometry) -> Result<()> {
        if self.width != geometry.width || self.height != geometry.height {
            return Err(EtoDataError::DimensionMismatch {
                width: geometry.width,
                height: geometry.height,
                found_width: self.width,
                found_height: self.height,
            });
        }
        Ok(())
    }

    /// Reads exactly the header bytes; a stream that ends early fails with `HeaderTooShort`.
    pub fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let mut buf = Vec::with_capacity(HEADER_SIZE);
        (&mut *reader)
            .take(HEADER_SIZE as u64)
            .read_to_end(&mut buf)
            .map_err(|source| EtoDataError::ReadFailed { operation: "reading header", source })?;
        Self::decode(&buf)
    }

    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        writer
            .write_all(&self.encode())
            .map_err(EtoDataError::write_failed("writing header"))?;
        Ok(())
    }

    /// Annual ETo in inches for a reduced sample, `None` for the fill sample.
    pub fn physical_value(&self, sample: u8) -> Option<f64> {
        if sample == FILL_SAMPLE {
            return None;
        }
        Some(sample as f64 * self.scaling_factor as f64 + self.min_eto as f64)
    }
}

fn be_word(buf: &[u8], offset: usize) -> [u8; 4] {
    [buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]]
}
