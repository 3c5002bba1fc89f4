//! Error types for the scan

use thiserror::Error;

/// Infrastructure failure that aborts a run before any diagnostic is
/// produced
///
/// Detected lint conditions are not errors; they are [`Diagnostic`]s and
/// never interrupt a scan.
///
/// [`Diagnostic`]: crate::scanner::Diagnostic
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decoding error: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

pub type ScanResult<T> = Result<T, ScanError>;
