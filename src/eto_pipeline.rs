//! Baseline ETo data preparation pipeline
//!
//! This module turns a global 16-bit evapotranspiration raster into a compact 8-bit
//! container raster and fills its land gaps, with separate modules for the container
//! format, bit-depth reduction, mask sampling, gap filling and orchestration.

pub mod common;
pub mod raster;
pub mod reduction;
pub mod mask;
pub mod gap_fill;
pub mod tiff;
pub mod lookup;
pub mod conversions;

pub use common::{
    EtoDataError,
    Result,
};

pub use raster::{
    PixelStats,
    RasterGeometry,
    RasterHeader,
};

pub use reduction::{
    BitDepthReducer,
    LittleEndianSampleSource,
    PixelRangeScanner,
    SampleSource,
};

pub use mask::{
    LandMask,
    MaskSampler,
    Surface,
};

pub use gap_fill::{
    GapFillPass,
    PassResult,
};

pub use self::tiff::{
    PreviewConfig,
    TiffPreviewWriter,
};

pub use lookup::{
    BaselineEtoLookup,
    GeoCoordinates,
};

pub use conversions::{
    BaselineEtoPipeline,
    PipelineConfig,
    PipelineConfigBuilder,
    PipelineSummary,
};
