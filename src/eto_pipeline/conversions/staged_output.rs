use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::eto_pipeline::common::error::{EtoDataError, Result};

/// Output written to a temporary file next to `target` and renamed on commit.
/// Dropping it uncommitted removes the temporary file, so `target` only ever appears complete.
pub(crate) struct StagedOutput {
    target: PathBuf,
    writer: BufWriter<NamedTempFile>,
}

impl StagedOutput {
    pub(crate) fn create(target: &Path) -> Result<Self> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let file = NamedTempFile::new_in(dir)
            .map_err(|e| EtoDataError::open_failed("output", target, e))?;

        Ok(Self {
            target: target.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    pub(crate) fn writer(&mut self) -> &mut BufWriter<NamedTempFile> {
        &mut self.writer
    }

    pub(crate) fn commit(self) -> Result<PathBuf> {
        let file = self
            .writer
            .into_inner()
            .map_err(|e| EtoDataError::write_failed("flushing staged output")(e.into_error()))?;
        let commit_failed = |source: io::Error| EtoDataError::CommitFailed { path: self.target.clone(), source };
        file.as_file().sync_all().map_err(commit_failed)?;
        file.persist(&self.target).map_err(|e| commit_failed(e.error))?;
        Ok(self.target)
    }
}
