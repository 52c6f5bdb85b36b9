use std::io;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Top-level error type
// ---------------------------------------------------------------------------

/// Errors bubbled up by the loading / selection pipeline.
///
/// All of these abort the invocation: either every requested file decodes
/// and resolves, or nothing is rendered.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Header convention not recognised or inconsistent with the data.
    #[error("format not recognised: {0}")]
    Format(String),

    /// The field to plot could not be determined.
    #[error("spectrum type not recognised: {0}")]
    UnknownType(String),

    /// Wrong number of files for the requested operation.
    #[error("invalid number of files: {0}")]
    NumberOfFiles(String),

    /// Invalid or unresolvable field selection, or an unimplemented mode.
    #[error("incompatible input: {0}")]
    Input(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
