//! Error types for voxelization.

use crate::config::ConfigError;
use gesture_data::DataError;
use thiserror::Error;

/// Errors that can occur while voxelizing a trajectory.
#[derive(Debug, Error)]
pub enum VoxelError {
    #[error("Degenerate trajectory: largest span is {extent}, so the scale is undefined")]
    DegenerateTrajectory { extent: f64 },

    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigError),

    #[error("Feature vector has {actual} values, expected {expected}")]
    GridSizeMismatch { expected: usize, actual: usize },

    #[error("Sample '{0}' has no label")]
    Unlabeled(String),

    #[error("Sample '{name}' has class {index}, but only {classes} labels are known")]
    UnknownClass {
        name: String,
        index: usize,
        classes: usize,
    },

    #[error("Trajectory input error: {0}")]
    Data(#[from] DataError),
}
