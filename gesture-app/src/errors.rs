//! Error types for the command-line front end.

use gesture_data::DataError;
use gesture_voxel::{ConfigError, VoxelError};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Voxelization error: {0}")]
    Voxel(#[from] VoxelError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Config file parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Whether the error only concerns one input file, which can be skipped.
    pub fn is_per_file(&self) -> bool {
        match self {
            AppError::Data(e) | AppError::Voxel(VoxelError::Data(e)) => {
                matches!(e, DataError::MalformedInput { .. } | DataError::UnknownLabel { .. })
            }
            AppError::Voxel(VoxelError::DegenerateTrajectory { .. }) => true,
            _ => false,
        }
    }
}
