//! Error types for trajectory and dataset loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading gesture samples.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Malformed sample at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("Unknown label '{label}' for file {file}")]
    UnknownLabel { file: String, label: String },

    #[error("Invalid file name: {}", .0.display())]
    InvalidFileName(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
