use std::io::Cursor;

use tiff::decoder::{Decoder, DecodingResult};
use tiff::tags::Tag;

use crate::eto_pipeline::common::error::EtoDataError;
use crate::eto_pipeline::raster::{FILL_SAMPLE, PixelStats, RasterGeometry, RasterHeader};
use crate::eto_pipeline::tiff::{PreviewConfig, TiffPreviewWriter};

fn container(width: u32, height: u32, body: &[u8]) -> Vec<u8> {
    let geometry = RasterGeometry::new(width, height, width, 18);
    let stats = PixelStats::from_range(0, 255).unwrap();
    let mut bytes = RasterHeader::for_reduced(&geometry, &stats).encode().to_vec();
    bytes.extend_from_slice(body);
    bytes
}

fn decode(tiff_bytes: Vec<u8>) -> ((u32, u32), Vec<u8>) {
    let mut decoder = Decoder::new(Cursor::new(tiff_bytes)).unwrap();
    let dimensions = decoder.dimensions().unwrap();
    match decoder.read_image().unwrap() {
        DecodingResult::U8(data) => (dimensions, data),
        _ => panic!("preview is not an 8-bit image"),
    }
}

#[test]
fn test_config_builder() {
    let config = PreviewConfig::builder().rows_per_strip(0).build();
    assert_eq!(config.rows_per_strip, 1);

    let default = PreviewConfig::builder().build();
    assert_eq!(default.rows_per_strip, 64);
}

#[test]
fn test_preview_matches_raster_body() {
    let body: Vec<u8> = (0..20).map(|i| if i == 7 { FILL_SAMPLE } else { i * 10 }).collect();

    // 2 leaves a short last strip, 64 is taller than the image
    for rows_per_strip in [1, 2, 5, 64] {
        let writer = TiffPreviewWriter::new(PreviewConfig::builder().rows_per_strip(rows_per_strip).build());
        let mut input = Cursor::new(container(4, 5, &body));
        let mut output = Cursor::new(Vec::new());

        let header = writer.write_preview(&mut input, &mut output).unwrap();

        assert_eq!((header.width, header.height), (4, 5));
        assert_eq!(decode(output.into_inner()), ((4, 5), body.clone()));
    }
}

#[test]
fn test_preview_is_uncompressed() {
    let body = vec![42u8; 20];
    let writer = TiffPreviewWriter::new(PreviewConfig::default());
    let mut output = Cursor::new(Vec::new());

    writer.write_preview(&mut Cursor::new(container(4, 5, &body)), &mut output).unwrap();

    let mut decoder = Decoder::new(Cursor::new(output.into_inner())).unwrap();
    assert_eq!(decoder.get_tag_u32(Tag::Compression).unwrap(), 1);
    assert_eq!(decoder.get_tag_u32(Tag::RowsPerStrip).unwrap(), 64);
}

#[test]
fn test_preview_truncated_body() {
    let writer = TiffPreviewWriter::new(PreviewConfig::default());
    let mut input = Cursor::new(container(4, 5, &[1u8; 12]));
    let mut output = Cursor::new(Vec::new());

    let result = writer.write_preview(&mut input, &mut output);

    assert!(matches!(result, Err(EtoDataError::UnexpectedEof { row: 3, .. })));
}

#[test]
fn test_preview_rejects_unknown_version() {
    let mut bytes = container(4, 5, &[0u8; 20]);
    bytes[0] = 3;
    let writer = TiffPreviewWriter::new(PreviewConfig::default());

    let result = writer.write_preview(&mut Cursor::new(bytes), Cursor::new(Vec::new()));

    assert!(matches!(result, Err(EtoDataError::UnsupportedVersion(3))));
}
