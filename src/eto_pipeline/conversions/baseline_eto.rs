use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use tracing::{info, instrument};

use crate::eto_pipeline::{
    common::error::{EtoDataError, Result},
    conversions::staged_output::StagedOutput,
    conversions::types::{PipelineConfig, PipelineSummary},
    gap_fill::{GapFillPass, PassResult},
    mask::MaskSampler,
    raster::{PixelStats, RasterHeader},
    reduction::{BitDepthReducer, LittleEndianSampleSource, PixelRangeScanner},
    tiff::{PreviewConfig, TiffPreviewWriter},
};

/// Runs the full preparation: range scan, reduction into pass 0, then gap-fill passes
/// 1..=n, each reading the previous pass's output.
pub struct BaselineEtoPipeline {
    config: PipelineConfig,
}

impl BaselineEtoPipeline {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[instrument(skip(self))]
    pub fn run(&self, passes: u32) -> Result<PipelineSummary> {
        if passes == 0 {
            return Err(EtoDataError::InvalidPassCount(passes));
        }

        let stats = self.find_pixel_range().map_err(|e| e.in_pass(0))?;
        let header = self.reduce_bit_depth(&stats).map_err(|e| e.in_pass(0))?;

        let mut outputs = vec![self.config.output_path(0)];
        let mut results = Vec::with_capacity(passes as usize);
        for pass in 1..=passes {
            let result = self
                .fill_missing_pixels(pass, &header)
                .map_err(|e| e.in_pass(pass))?;
            results.push(result);
            outputs.push(self.config.output_path(pass));
        }

        Ok(PipelineSummary {
            stats,
            header,
            passes: results,
            outputs,
        })
    }

    pub fn find_pixel_range(&self) -> Result<PixelStats> {
        let started = Instant::now();
        let mut source = LittleEndianSampleSource::new(open_input("source", &self.config.source_path)?);

        let stats = PixelRangeScanner::new(self.config.geometry).scan(&mut source)?;

        info!("Found pixel range in {:.1} seconds", started.elapsed().as_secs_f64());
        Ok(stats)
    }

    /// Writes pass 0 and returns the header every later pass re-emits.
    pub fn reduce_bit_depth(&self, stats: &PixelStats) -> Result<RasterHeader> {
        let started = Instant::now();
        let mut source = LittleEndianSampleSource::new(open_input("source", &self.config.source_path)?);
        let mut output = StagedOutput::create(&self.config.output_path(0))?;

        let header = BitDepthReducer::new(self.config.geometry).reduce(&mut source, stats, output.writer())?;
        let path = output.commit()?;

        info!(
            output = %path.display(),
            "Finished reducing bit depth in {:.1} seconds",
            started.elapsed().as_secs_f64()
        );
        Ok(header)
    }

    /// Runs gap-fill pass `pass` (>= 1) over the output of pass `pass - 1`.
    #[instrument(skip(self, header))]
    pub fn fill_missing_pixels(&self, pass: u32, header: &RasterHeader) -> Result<PassResult> {
        if pass == 0 {
            return Err(EtoDataError::InvalidPassCount(pass));
        }
        let started = Instant::now();

        let mut input = open_input("input", &self.config.output_path(pass - 1))?;
        let mut mask = MaskSampler::new(open_input("mask", &self.config.mask_path)?, self.config.geometry)?;
        let mut output = StagedOutput::create(&self.config.output_path(pass))?;

        let result = GapFillPass::new(self.config.geometry).run(&mut input, &mut mask, header, output.writer())?;
        output.commit()?;

        info!(
            pass,
            fixed = result.fixed,
            unfixable = result.unfixable,
            water = result.water,
            "Finished pass in {:.1} seconds",
            started.elapsed().as_secs_f64()
        );
        Ok(result)
    }

    /// Exports the output of `pass` as a grayscale TIFF.
    pub fn export_preview(&self, pass: u32, target: &Path, config: PreviewConfig) -> Result<()> {
        let mut input = open_input("input", &self.config.output_path(pass))?;
        let mut output = StagedOutput::create(target)?;

        TiffPreviewWriter::new(config).write_preview(&mut input, output.writer())?;
        let path = output.commit()?;

        info!(pass, output = %path.display(), "Exported TIFF preview");
        Ok(())
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }
}

fn open_input(role: &'static str, path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| EtoDataError::open_failed(role, path, e))
}
