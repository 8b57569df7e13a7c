//! Common utilities module
//!
//! This module contains shared utilities used across the ETo pipeline.

pub mod error;

pub use error::{EtoDataError, Result};

/// Streaming passes log progress once every this many rows.
pub(crate) const PROGRESS_ROW_INTERVAL: u32 = 1000;
