use std::io::{self, Cursor, Read, Seek, SeekFrom};

use crate::eto_pipeline::common::error::EtoDataError;
use crate::eto_pipeline::mask::{LandMask, MaskSampler, Surface};
use crate::eto_pipeline::raster::RasterGeometry;

/// Endless stream of one byte value that records every seek target.
struct RecordingReader {
    value: u8,
    position: u64,
    seeks: Vec<u64>,
}

impl Read for RecordingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        buf.fill(self.value);
        self.position += buf.len() as u64;
        Ok(buf.len())
    }
}

impl Seek for RecordingReader {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        if let SeekFrom::Start(offset) = pos {
            self.position = offset;
            self.seeks.push(offset);
        }
        Ok(self.position)
    }
}

#[test]
fn test_classification_threshold() {
    assert_eq!(Surface::from_mask_sample(0), Surface::Water);
    assert_eq!(Surface::from_mask_sample(128), Surface::Water);
    assert_eq!(Surface::from_mask_sample(129), Surface::Land);
    assert_eq!(Surface::from_mask_sample(255), Surface::Land);
}

#[test]
fn test_full_resolution_crop_offset() {
    let mut reader = RecordingReader { value: 200, position: 0, seeks: Vec::new() };
    let mut sampler = MaskSampler::new(&mut reader, RasterGeometry::default()).unwrap();

    sampler.load_row(4).unwrap();
    assert_eq!(sampler.current_offset(), Some(10800 + 3_240_000));
    assert_eq!(sampler.classify(43199), Surface::Land);

    sampler.load_row(16799).unwrap();
    assert_eq!(sampler.current_offset(), Some(4199 * 10800 + 3_240_000));

    assert_eq!(reader.seeks, vec![3_250_800, 4199 * 10800 + 3_240_000]);
}

#[test]
fn test_columns_share_mask_samples() {
    // 8x8 raster over a 4x36 mask: ratio 2, crop of 8 bytes (two mask rows)
    let geometry = RasterGeometry::new(8, 8, 4, 36);
    assert_eq!(geometry.cropped_top_pixels(), 8);

    let mut mask = vec![0u8; 4 * 36];
    mask[8..12].copy_from_slice(&[255, 0, 255, 0]);
    mask[12..16].copy_from_slice(&[0, 255, 0, 255]);
    let mut sampler = MaskSampler::new(Cursor::new(mask), geometry).unwrap();

    sampler.load_row(1).unwrap();
    let row: Vec<Surface> = (0..8).map(|x| sampler.classify(x)).collect();
    assert_eq!(
        row,
        [Surface::Land, Surface::Land, Surface::Water, Surface::Water,
         Surface::Land, Surface::Land, Surface::Water, Surface::Water]
    );

    sampler.load_row(2).unwrap();
    assert_eq!(sampler.current_offset(), Some(12));
    assert_eq!(sampler.classify(0), Surface::Water);
    assert_eq!(sampler.classify(3), Surface::Land);
}

#[test]
fn test_truncated_mask() {
    let geometry = RasterGeometry::new(8, 8, 8, 18);
    let mut sampler = MaskSampler::new(Cursor::new(vec![255u8; 20]), geometry).unwrap();

    sampler.load_row(0).unwrap();
    let err = sampler.load_row(1).unwrap_err();
    assert!(matches!(err, EtoDataError::MaskRead { offset: 16, .. }));
}

#[test]
fn test_rejects_non_integral_ratio() {
    let result = MaskSampler::new(Cursor::new(Vec::new()), RasterGeometry::new(10, 4, 3, 3));
    assert!(matches!(result, Err(EtoDataError::InvalidGeometry(_))));
}
