//! TIFF preview configuration types

/// Configuration for container to TIFF export.
///
/// Previews are uncompressed: strips are streamed straight from the container body, so
/// nothing larger than one strip is ever held in memory.
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Raster rows per TIFF strip; bounds the memory held while exporting
    pub rows_per_strip: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self { rows_per_strip: 64 }
    }
}

impl PreviewConfig {
    pub fn builder() -> PreviewConfigBuilder {
        PreviewConfigBuilder::default()
    }
}

/// Builder for PreviewConfig
#[derive(Default)]
pub struct PreviewConfigBuilder {
    rows_per_strip: Option<u32>,
}

impl PreviewConfigBuilder {
    pub fn rows_per_strip(mut self, rows: u32) -> Self {
        self.rows_per_strip = Some(rows.max(1));
        self
    }

    pub fn build(self) -> PreviewConfig {
        let default = PreviewConfig::default();
        PreviewConfig {
            rows_per_strip: self.rows_per_strip.unwrap_or(default.rows_per_strip),
        }
    }
}
