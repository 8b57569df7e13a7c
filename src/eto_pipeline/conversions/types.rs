//! Pipeline configuration types

use std::path::PathBuf;

use crate::eto_pipeline::common::error::{EtoDataError, Result};
use crate::eto_pipeline::gap_fill::PassResult;
use crate::eto_pipeline::raster::{PixelStats, RasterGeometry, RasterHeader};

pub const DEFAULT_SOURCE_PATH: &str = "./MOD16A3_PET_2000_to_2013_mean.bin";
pub const DEFAULT_MASK_PATH: &str = "./Ocean_Mask.bin";
pub const DEFAULT_OUTPUT_TEMPLATE: &str = "./Baseline_ETo_Data-Pass_{pass}.bin";

/// Replaced by the pass number in the output template.
pub const PASS_PLACEHOLDER: &str = "{pass}";

/// Configuration for a data preparation run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// 16-bit source raster, little-endian samples without header
    pub source_path: PathBuf,
    /// Land/water mask raster, one byte per sample
    pub mask_path: PathBuf,
    /// Output file name, must contain `{pass}`
    pub output_template: String,
    pub geometry: RasterGeometry,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            mask_path: PathBuf::from(DEFAULT_MASK_PATH),
            output_template: DEFAULT_OUTPUT_TEMPLATE.to_string(),
            geometry: RasterGeometry::default(),
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<()> {
        if !self.output_template.contains(PASS_PLACEHOLDER) {
            return Err(EtoDataError::InvalidConfig(format!(
                "output template '{}' does not contain {}",
                self.output_template, PASS_PLACEHOLDER
            )));
        }
        self.geometry.validate()
    }

    /// Output file of `pass`; pass 0 is the reduced raster.
    pub fn output_path(&self, pass: u32) -> PathBuf {
        PathBuf::from(self.output_template.replace(PASS_PLACEHOLDER, &pass.to_string()))
    }
}

/// Builder for PipelineConfig
#[derive(Default)]
pub struct PipelineConfigBuilder {
    source_path: Option<PathBuf>,
    mask_path: Option<PathBuf>,
    output_template: Option<String>,
    geometry: Option<RasterGeometry>,
}

impl PipelineConfigBuilder {
    pub fn source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    pub fn mask_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.mask_path = Some(path.into());
        self
    }

    pub fn output_template(mut self, template: impl Into<String>) -> Self {
        self.output_template = Some(template.into());
        self
    }

    pub fn geometry(mut self, geometry: RasterGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            source_path: self.source_path.unwrap_or(default.source_path),
            mask_path: self.mask_path.unwrap_or(default.mask_path),
            output_template: self.output_template.unwrap_or(default.output_template),
            geometry: self.geometry.unwrap_or(default.geometry),
        }
    }
}

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct PipelineSummary {
    pub stats: PixelStats,
    /// Header shared by every output file
    pub header: RasterHeader,
    /// Counters of passes 1..=n, in order
    pub passes: Vec<PassResult>,
    /// Output files of passes 0..=n, in order
    pub outputs: Vec<PathBuf>,
}

impl PipelineSummary {
    /// The last raster written, the fully gap-filled one.
    pub fn final_output(&self) -> Option<&PathBuf> {
        self.outputs.last()
    }
}
