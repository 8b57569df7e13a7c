use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use tracing::debug;

use crate::eto_pipeline::common::error::{EtoDataError, Result};
use crate::eto_pipeline::raster::{HEADER_SIZE, RasterHeader};

/// The raster omits the northernmost 10 and the southernmost 30 degrees of latitude.
const NORTH_CROP_DEGREES: f64 = 10.0;
const SOUTH_CROP_DEGREES: f64 = 30.0;
const LATITUDE_SPAN_DEGREES: f64 = 180.0 - NORTH_CROP_DEGREES - SOUTH_CROP_DEGREES;
const DAYS_PER_YEAR: f64 = 365.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Random access to the samples of a container raster.
pub struct BaselineEtoLookup<R: Read + Seek> {
    reader: R,
    header: RasterHeader,
    /// Pixel position of latitude 0, longitude 0
    origin: (i64, i64),
}

impl BaselineEtoLookup<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| EtoDataError::open_failed("baseline ETo", path, e))?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> BaselineEtoLookup<R> {
    /// Reads and validates the header.
    pub fn new(mut reader: R) -> Result<Self> {
        reader
            .seek(SeekFrom::Start(0))
            .map_err(|source| EtoDataError::ReadFailed { operation: "reading header", source })?;
        let header = RasterHeader::read_from(&mut reader)?;
        header.validate()?;

        let origin_y = (header.height as f64 / LATITUDE_SPAN_DEGREES * (90.0 - NORTH_CROP_DEGREES)).floor();
        let origin = ((header.width / 2) as i64, origin_y as i64);
        debug!(width = header.width, height = header.height, ?origin, "Loaded baseline ETo header");

        Ok(Self { reader, header, origin })
    }

    pub fn header(&self) -> &RasterHeader {
        &self.header
    }

    /// Pixel holding `coordinates`, or `OutOfBounds` for the cropped latitudes.
    pub fn pixel_for(&self, coordinates: GeoCoordinates) -> Result<(u32, u32)> {
        let width = self.header.width as f64;
        let height = self.header.height as f64;
        let x = (self.origin.0 as f64 + width * coordinates.longitude / 360.0).floor();
        let y = (self.origin.1 as f64 - height * coordinates.latitude / LATITUDE_SPAN_DEGREES).floor();

        if !(0.0..width).contains(&x) || !(0.0..height).contains(&y) {
            return Err(EtoDataError::OutOfBounds);
        }
        Ok((x as u32, y as u32))
    }

    pub fn sample_at(&mut self, x: u32, y: u32) -> Result<u8> {
        if x >= self.header.width || y >= self.header.height {
            return Err(EtoDataError::OutOfBounds);
        }
        let offset = HEADER_SIZE as u64 + y as u64 * self.header.width as u64 + x as u64;
        let mut sample = [0u8; 1];
        self.reader
            .seek(SeekFrom::Start(offset))
            .and_then(|_| self.reader.read_exact(&mut sample))
            .map_err(|source| EtoDataError::ReadFailed { operation: "reading sample", source })?;
        Ok(sample[0])
    }

    /// Average daily potential ETo at `coordinates`, in inches per day.
    pub fn daily_eto(&mut self, coordinates: GeoCoordinates) -> Result<f64> {
        let (x, y) = self.pixel_for(coordinates)?;
        let sample = self.sample_at(x, y)?;
        let annual = self.header.physical_value(sample).ok_or(EtoDataError::NoData)?;
        Ok(annual / DAYS_PER_YEAR)
    }
}
