use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtoDataError {
    #[error("Invalid pass count: {0} (must be a positive integer)")]
    InvalidPassCount(u32),

    #[error("Invalid raster geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to open {role} file {}: {source}", .path.display())]
    OpenFailed {
        role: &'static str,
        path: PathBuf,
        source: io::Error,
    },

    #[error("Failed to read row {row} while {operation}: {source}")]
    RowRead {
        operation: &'static str,
        row: u32,
        source: io::Error,
    },

    #[error("Encountered end of stream reading row {row} while {operation}")]
    UnexpectedEof { operation: &'static str, row: u32 },

    #[error("Failed to write row {row} while {operation}: {source}")]
    RowWrite {
        operation: &'static str,
        row: u32,
        source: io::Error,
    },

    #[error("Failed while {operation}: {source}")]
    ReadFailed {
        operation: &'static str,
        source: io::Error,
    },

    #[error("Failed while {operation}: {source}")]
    WriteFailed {
        operation: &'static str,
        source: io::Error,
    },

    #[error("Failed to commit output file {}: {source}", .path.display())]
    CommitFailed { path: PathBuf, source: io::Error },

    #[error("Failed to read mask at offset {offset}: {source}")]
    MaskRead { offset: u64, source: io::Error },

    #[error("Header buffer too short: {0} bytes")]
    HeaderTooShort(usize),

    #[error("Unsupported data file version {0}, the maximum supported version is 1")]
    UnsupportedVersion(u8),

    #[error("Unsupported bit depth {0}, only 8 is supported")]
    UnsupportedBitDepth(u8),

    #[error("Raster dimensions {found_width}x{found_height} do not match expected {width}x{height}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        found_width: u32,
        found_height: u32,
    },

    #[error("Source raster contains no valid samples")]
    NoValidSamples,

    #[error("Pass {pass} failed: {source}")]
    Pass {
        pass: u32,
        #[source]
        source: Box<EtoDataError>,
    },

    #[error("Location is out of bounds")]
    OutOfBounds,

    #[error("ETo data is not available for this location")]
    NoData,

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),
}

impl EtoDataError {
    pub(crate) fn open_failed(role: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        EtoDataError::OpenFailed { role, path: path.into(), source }
    }

    /// Maps a failed `read_exact` into the eof or read variant with its row context.
    pub(crate) fn row_read(operation: &'static str, row: u32, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::UnexpectedEof {
            EtoDataError::UnexpectedEof { operation, row }
        } else {
            EtoDataError::RowRead { operation, row, source }
        }
    }

    pub(crate) fn write_failed(operation: &'static str) -> impl FnOnce(io::Error) -> Self {
        move |source| EtoDataError::WriteFailed { operation, source }
    }

    pub(crate) fn in_pass(self, pass: u32) -> Self {
        EtoDataError::Pass { pass, source: Box::new(self) }
    }
}

pub type Result<T> = std::result::Result<T, EtoDataError>;
