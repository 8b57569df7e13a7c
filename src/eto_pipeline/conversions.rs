//! Pipeline conversions module
//!
//! Orchestrates the range scan, the bit-depth reduction and the chained gap-fill passes
//! over files on disk.

mod baseline_eto;
mod staged_output;
pub mod types;


pub use baseline_eto::BaselineEtoPipeline;
pub use types::{
    DEFAULT_MASK_PATH, DEFAULT_OUTPUT_TEMPLATE, DEFAULT_SOURCE_PATH, PASS_PLACEHOLDER,
    PipelineConfig, PipelineConfigBuilder, PipelineSummary,
};
