use std::path::PathBuf;

use anyhow::Context;
use baseline_eto_rs::eto_pipeline::conversions::{DEFAULT_MASK_PATH, DEFAULT_OUTPUT_TEMPLATE, DEFAULT_SOURCE_PATH};
use baseline_eto_rs::eto_pipeline::{BaselineEtoPipeline, PipelineConfig, PreviewConfig};
use baseline_eto_rs::logger;
use clap::Parser;
use tracing::{error, info};

/// Reduces the baseline ETo raster to 8 bits and fills missing land pixels.
#[derive(Parser, Debug)]
#[command(name = "prepare_eto", version)]
struct Args {
    /// Number of gap-fill passes to run
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    passes: u32,

    /// 16-bit source raster
    #[arg(long, default_value = DEFAULT_SOURCE_PATH)]
    source: PathBuf,

    /// Land/water mask raster
    #[arg(long, default_value = DEFAULT_MASK_PATH)]
    mask: PathBuf,

    /// Output file name, `{pass}` is replaced by the pass number
    #[arg(long, default_value = DEFAULT_OUTPUT_TEMPLATE)]
    output_template: String,

    /// Also export the final raster as a grayscale TIFF
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Raster rows per TIFF strip in the preview
    #[arg(long, default_value_t = 64)]
    preview_rows_per_strip: u32,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init();

    info!("Starting baseline ETo data preparation...");

    let config = PipelineConfig::builder()
        .source_path(args.source)
        .mask_path(args.mask)
        .output_template(args.output_template)
        .build();
    let pipeline = BaselineEtoPipeline::new(config)?;

    info!("Source: {}", pipeline.config().source_path.display());
    info!("Mask: {}", pipeline.config().mask_path.display());
    info!("Passes: {}", args.passes);

    let summary = match pipeline.run(args.passes) {
        Ok(summary) => summary,
        Err(e) => {
            error!("Data preparation failed: {}", e);
            return Err(e.into());
        }
    };

    if let Some(path) = summary.final_output() {
        info!("Final raster: {}", path.display());
    }

    if let Some(preview) = args.preview {
        let config = PreviewConfig::builder()
            .rows_per_strip(args.preview_rows_per_strip)
            .build();
        pipeline
            .export_preview(args.passes, &preview, config)
            .with_context(|| format!("failed to export preview to {}", preview.display()))?;
    }

    Ok(())
}
