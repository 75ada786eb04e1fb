//! Gesture Voxelization Engine
//!
//! Turns a recorded 3D gesture trajectory into a fixed-size dense occupancy grid and
//! flattens it into a feature vector for an external classifier.
//!
//! ## Modules
//!
//! - [`config`]: grid size and brush radius, validated once up front
//! - [`bounds`]: bounding box, uniform scale and per-axis centering offsets
//! - [`raster`]: dense voxel grid and falloff brush splatting
//! - [`flatten`]: row-major feature vectors and their inverse
//! - [`engine`]: the [`VoxelEngine`] entry point sequencing the stages
//! - [`sink`]: consumers of labeled feature vectors

pub mod bounds;
pub mod config;
pub mod engine;
pub mod error;
pub mod flatten;
pub mod raster;
pub mod sink;

pub use bounds::{BoundingBox, NormalizationParams};
pub use config::{
    ConfigError, DEFAULT_BRUSH_RADIUS, DEFAULT_GRID_SIZE, MAX_BRUSH_RADIUS, MAX_GRID_SIZE,
    VoxelConfig,
};
pub use engine::{VoxelEngine, voxelize};
pub use error::VoxelError;
pub use flatten::{FeatureVector, flatten, unflatten};
pub use raster::{Brush, VoxelGrid, VoxelGridRasterizer};
pub use sink::{FeatureMatrix, FeatureSink, LabeledFeatures};
