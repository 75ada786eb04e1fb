//! Grid flattening.
//!
//! The grid buffer is already row-major (x outermost, z innermost), so flattening is an
//! order-preserving copy and unflattening is the same buffer with its size restored.

use crate::config::ConfigError;
use crate::error::VoxelError;
use crate::raster::VoxelGrid;

/// Flat feature vector of `grid_size³` intensities.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f32>,
}

impl FeatureVector {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.values
    }

    /// All values on one comma-separated line, without a trailing comma or newline.
    pub fn to_csv_line(&self) -> String {
        self.values
            .iter()
            .map(|v| format!("{v:?}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl From<VoxelGrid> for FeatureVector {
    fn from(grid: VoxelGrid) -> Self {
        Self {
            values: grid.into_vec(),
        }
    }
}

impl From<FeatureVector> for Vec<f32> {
    fn from(features: FeatureVector) -> Self {
        features.values
    }
}

/// Flatten a grid in x, y, z order.
pub fn flatten(grid: &VoxelGrid) -> FeatureVector {
    FeatureVector {
        values: grid.as_slice().to_vec(),
    }
}

/// Rebuild the grid a feature vector was flattened from.
pub fn unflatten(features: &FeatureVector, grid_size: usize) -> Result<VoxelGrid, VoxelError> {
    let expected = grid_size
        .checked_pow(3)
        .ok_or(ConfigError::GridTooLarge(grid_size))?;
    if features.len() != expected {
        return Err(VoxelError::GridSizeMismatch {
            expected,
            actual: features.len(),
        });
    }
    Ok(VoxelGrid::from_raw(grid_size, features.values.clone()))
}
