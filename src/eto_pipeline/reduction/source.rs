use std::io::{self, Read};

/// Row-granular reader of 16-bit source samples.
pub trait SampleSource {
    /// Fills `row` with the next `row.len()` samples of the raster.
    fn read_samples(&mut self, row: &mut [u16]) -> io::Result<()>;
}

/// Source raster stored as little-endian u16 samples, row-major, without header.
pub struct LittleEndianSampleSource<R: Read> {
    reader: R,
    bytes: Vec<u8>,
}

impl<R: Read> LittleEndianSampleSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, bytes: Vec::new() }
    }
}

impl<R: Read> SampleSource for LittleEndianSampleSource<R> {
    fn read_samples(&mut self, row: &mut [u16]) -> io::Result<()> {
        self.bytes.resize(row.len() * 2, 0);
        self.reader.read_exact(&mut self.bytes)?;
        for (sample, pair) in row.iter_mut().zip(self.bytes.chunks_exact(2)) {
            *sample = u16::from_le_bytes([pair[0], pair[1]]);
        }
        Ok(())
    }
}
