//! Bounding box normalization.
//!
//! A trajectory is scaled uniformly so its largest span covers `grid_size - 1` voxels,
//! then centered independently on each axis.

use crate::config::ConfigError;
use crate::error::VoxelError;
use gesture_data::Trajectory;
use glam::{DVec3, I64Vec3};
use tracing::debug;

/// Axis-aligned bounds of a trajectory.
///
/// The accumulators start at the origin rather than at the first point, so the box
/// always contains `(0, 0, 0)`. A gesture recorded far from the origin is therefore
/// normalized against the origin too; this is the baseline the trained models expect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: DVec3,
    pub max: DVec3,
}

impl BoundingBox {
    pub fn from_trajectory(trajectory: &Trajectory) -> Self {
        Self::from_positions(trajectory.positions())
    }

    pub fn from_positions(positions: impl Iterator<Item = DVec3>) -> Self {
        positions.fold(
            Self {
                min: DVec3::ZERO,
                max: DVec3::ZERO,
            },
            |bounds, p| Self {
                min: bounds.min.min(p),
                max: bounds.max.max(p),
            },
        )
    }

    /// Width, height and depth of the box.
    pub fn spans(&self) -> DVec3 {
        self.max - self.min
    }

    pub fn largest_span(&self) -> f64 {
        self.spans().max_element()
    }
}

/// Scale and centering derived from a trajectory's bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationParams {
    pub bounds: BoundingBox,
    /// Voxels per trajectory unit, uniform on all axes.
    pub scale: f64,
    /// Per-axis shift that centers the scaled box inside the grid.
    pub offset: [usize; 3],
}

impl NormalizationParams {
    /// Normalize a trajectory for a cube of `grid_size` voxels per side.
    pub fn from_trajectory(trajectory: &Trajectory, grid_size: usize) -> Result<Self, VoxelError> {
        Self::from_bounds(BoundingBox::from_trajectory(trajectory), grid_size)
    }

    /// Fails with [`VoxelError::DegenerateTrajectory`] when the box has no usable extent and
    /// with [`VoxelError::Configuration`] when `grid_size` is below 2.
    pub fn from_bounds(bounds: BoundingBox, grid_size: usize) -> Result<Self, VoxelError> {
        if grid_size < 2 {
            return Err(ConfigError::GridTooSmall(grid_size).into());
        }

        let largest = bounds.largest_span();
        if !(largest > 0.0 && largest.is_finite()) {
            return Err(VoxelError::DegenerateTrajectory { extent: largest });
        }

        let scale = (grid_size - 1) as f64 / largest;
        let spans = bounds.spans();
        let offset = [0, 1, 2].map(|axis| centering_offset(spans[axis] * scale, grid_size));

        debug!(
            "Normalized bounds {:?}..{:?}: scale {:.4}, offset {:?}",
            bounds.min, bounds.max, scale, offset
        );

        Ok(Self {
            bounds,
            scale,
            offset,
        })
    }

    /// Scaled, unshifted grid coordinate of a position.
    ///
    /// Each axis uses its own minimum. Halves round to even.
    pub fn grid_coord(&self, position: DVec3) -> I64Vec3 {
        let scaled = (position - self.bounds.min) * self.scale;
        I64Vec3::new(
            scaled.x.round_ties_even() as i64,
            scaled.y.round_ties_even() as i64,
            scaled.z.round_ties_even() as i64,
        )
    }

    /// Brush center in grid space: the grid coordinate shifted by the centering offset.
    pub fn voxel_center(&self, position: DVec3) -> I64Vec3 {
        let [ox, oy, oz] = self.offset;
        self.grid_coord(position) + I64Vec3::new(ox as i64, oy as i64, oz as i64)
    }
}

fn centering_offset(scaled_span: f64, grid_size: usize) -> usize {
    ((grid_size as f64 - scaled_span) / 2.0).floor().max(0.0) as usize
}
