use std::io::Cursor;

use crate::eto_pipeline::common::error::EtoDataError;
use crate::eto_pipeline::lookup::{BaselineEtoLookup, GeoCoordinates};
use crate::eto_pipeline::raster::{FILL_SAMPLE, RasterHeader};

/// One pixel per degree: 360 x 140, sample value = column % 200, fill on row 10.
fn raster() -> Vec<u8> {
    let header = RasterHeader {
        version: 1,
        width: 360,
        height: 140,
        bit_depth: 8,
        min_eto: 20.0,
        scaling_factor: 0.5,
    };
    let mut bytes = header.encode().to_vec();
    for y in 0..140u32 {
        for x in 0..360u32 {
            bytes.push(if y == 10 { FILL_SAMPLE } else { (x % 200) as u8 });
        }
    }
    bytes
}

fn at(latitude: f64, longitude: f64) -> GeoCoordinates {
    GeoCoordinates { latitude, longitude }
}

#[test]
fn test_pixel_for_coordinates() {
    let lookup = BaselineEtoLookup::new(Cursor::new(raster())).unwrap();

    assert_eq!(lookup.pixel_for(at(0.0, 0.0)).unwrap(), (180, 80));
    assert_eq!(lookup.pixel_for(at(10.0, -90.0)).unwrap(), (90, 70));
    assert_eq!(lookup.pixel_for(at(80.0, -180.0)).unwrap(), (0, 0));
    assert_eq!(lookup.pixel_for(at(-59.5, 179.5)).unwrap(), (359, 139));
}

#[test]
fn test_cropped_latitudes_out_of_bounds() {
    let lookup = BaselineEtoLookup::new(Cursor::new(raster())).unwrap();

    assert!(matches!(lookup.pixel_for(at(80.5, 0.0)), Err(EtoDataError::OutOfBounds)));
    assert!(matches!(lookup.pixel_for(at(-60.0, 0.0)), Err(EtoDataError::OutOfBounds)));
    assert!(matches!(lookup.pixel_for(at(0.0, 180.0)), Err(EtoDataError::OutOfBounds)));
}

#[test]
fn test_daily_eto() {
    let mut lookup = BaselineEtoLookup::new(Cursor::new(raster())).unwrap();

    assert_eq!(lookup.sample_at(190, 80).unwrap(), 190);
    let eto = lookup.daily_eto(at(0.0, 10.0)).unwrap();
    assert!((eto - (190.0 * 0.5 + 20.0) / 365.0).abs() < 1e-9);
}

#[test]
fn test_fill_sample_has_no_data() {
    let mut lookup = BaselineEtoLookup::new(Cursor::new(raster())).unwrap();
    // row 10 is latitude 70
    assert!(matches!(lookup.daily_eto(at(70.0, 0.0)), Err(EtoDataError::NoData)));
}

#[test]
fn test_rejects_unsupported_header() {
    let mut bytes = raster();
    bytes[9] = 16;
    assert!(matches!(
        BaselineEtoLookup::new(Cursor::new(bytes)),
        Err(EtoDataError::UnsupportedBitDepth(16))
    ));
}
