//! Voxelization parameters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Length of each dimension of the cube; larger grids keep more gesture detail.
pub const DEFAULT_GRID_SIZE: usize = 50;

/// Brush radius in voxels; larger brushes generalize more.
pub const DEFAULT_BRUSH_RADIUS: usize = 4;

/// Largest accepted grid side; a grid of this size is 4 GiB of intensities.
pub const MAX_GRID_SIZE: usize = 1024;

/// Largest accepted brush radius; the brush kernel holds `(2r + 1)³` cells.
pub const MAX_BRUSH_RADIUS: usize = 64;

/// Invalid voxelization parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Grid size must be at least 2, got {0}")]
    GridTooSmall(usize),

    #[error("Grid size {0} exceeds the maximum of {MAX_GRID_SIZE}")]
    GridTooLarge(usize),

    #[error("Brush radius {0} exceeds the maximum of {MAX_BRUSH_RADIUS}")]
    BrushOverLimit(usize),

    #[error("Brush radius {brush_radius} must be smaller than grid size {grid_size}")]
    BrushTooLarge { brush_radius: usize, grid_size: usize },
}

/// Grid size and brush radius shared by every trajectory of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoxelConfig {
    pub grid_size: usize,
    pub brush_radius: usize,
}

impl Default for VoxelConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            brush_radius: DEFAULT_BRUSH_RADIUS,
        }
    }
}

impl VoxelConfig {
    /// Create a validated configuration.
    pub fn new(grid_size: usize, brush_radius: usize) -> Result<Self, ConfigError> {
        let config = Self {
            grid_size,
            brush_radius,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 2 {
            return Err(ConfigError::GridTooSmall(self.grid_size));
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge(self.grid_size));
        }
        if self.brush_radius > MAX_BRUSH_RADIUS {
            return Err(ConfigError::BrushOverLimit(self.brush_radius));
        }
        if self.brush_radius >= self.grid_size {
            return Err(ConfigError::BrushTooLarge {
                brush_radius: self.brush_radius,
                grid_size: self.grid_size,
            });
        }
        Ok(())
    }

    /// Number of voxels in the grid, and so the feature vector length.
    pub fn voxel_count(&self) -> usize {
        self.grid_size * self.grid_size * self.grid_size
    }
}
