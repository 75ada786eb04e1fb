//! Gesture Data Crate
//!
//! Loading utilities for recorded gesture trajectories and labeled gesture datasets.
//! This crate knows nothing about voxel grids; it turns text samples into points and
//! directories into labeled trajectories.

pub mod dataset;
pub mod error;
pub mod samples;
pub mod types;

pub use dataset::{
    DatasetSource, DirectoryDataset, LabelSet, LabeledTrajectory, file_name_of,
    list_trajectory_files,
};
pub use error::DataError;
pub use samples::{load_trajectory, load_trajectory_from_path, parse_sample_line, parse_trajectory};
pub use types::{Point3D, Trajectory};
