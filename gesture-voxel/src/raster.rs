//! Dense voxel grids and brush rasterization.

use crate::bounds::NormalizationParams;
use crate::config::{ConfigError, VoxelConfig};
use gesture_data::Trajectory;
use glam::I64Vec3;
use tracing::debug;

/// Dense cubic grid of intensities in `[0, 1]`.
///
/// Stored as one contiguous buffer in row-major order: x outermost, z innermost.
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelGrid {
    size: usize,
    data: Vec<f32>,
}

impl VoxelGrid {
    /// Create an all-zero grid with `size` voxels per side.
    ///
    /// Only reachable with sizes a [`VoxelConfig`] has validated; see [`VoxelGrid::try_new`].
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            data: vec![0.0; size * size * size],
        }
    }

    /// Create an all-zero grid, rejecting sizes outside what [`VoxelConfig`] accepts.
    pub fn try_new(size: usize) -> Result<Self, ConfigError> {
        let config = VoxelConfig {
            grid_size: size,
            brush_radius: 0,
        };
        config.validate()?;
        Ok(Self::new(size))
    }

    /// Wrap an existing buffer. The caller guarantees `data.len() == size³`.
    pub(crate) fn from_raw(size: usize, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), size * size * size);
        Self { size, data }
    }

    /// Voxels per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of voxels.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Linear offset of `(x, y, z)`. Does not bounds-check.
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (x * self.size + y) * self.size + z
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<f32> {
        if x < self.size && y < self.size && z < self.size {
            Some(self.data[self.index(x, y, z)])
        } else {
            None
        }
    }

    /// Linear offset of a signed coordinate, or `None` when any axis is outside the grid.
    pub fn checked_index(&self, coord: I64Vec3) -> Option<usize> {
        let size = self.size as i64;
        let inside = |v: i64| (0..size).contains(&v);
        if inside(coord.x) && inside(coord.y) && inside(coord.z) {
            Some(self.index(coord.x as usize, coord.y as usize, coord.z as usize))
        } else {
            None
        }
    }

    /// Raise the voxel at `index` to `value`; never lowers it.
    fn merge_max(&mut self, index: usize, value: f32) {
        let cell = &mut self.data[index];
        if value > *cell {
            *cell = value;
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    pub fn non_zero_count(&self) -> usize {
        self.data.iter().filter(|v| **v > 0.0).count()
    }

    pub fn max_value(&self) -> f32 {
        self.data.iter().copied().fold(0.0, f32::max)
    }

    /// Coordinate of the first voxel holding the maximum value, if any voxel is non-zero.
    pub fn argmax(&self) -> Option<[usize; 3]> {
        let mut best: Option<(usize, f32)> = None;
        for (i, &v) in self.data.iter().enumerate() {
            if v > best.map_or(0.0, |(_, b)| b) {
                best = Some((i, v));
            }
        }
        best.map(|(i, _)| self.coord_of(i))
    }

    fn coord_of(&self, index: usize) -> [usize; 3] {
        let plane = self.size * self.size;
        [index / plane, (index % plane) / self.size, index % self.size]
    }

    /// Pointwise maximum of two grids of the same size.
    pub fn max_with(&self, other: &VoxelGrid) -> Option<VoxelGrid> {
        if self.size != other.size {
            return None;
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a.max(*b))
            .collect();
        Some(Self::from_raw(self.size, data))
    }
}

/// Cubic brush with linear falloff by Chebyshev distance.
///
/// Offsets with zero intensity are dropped since merging them never changes a voxel.
#[derive(Debug, Clone)]
pub struct Brush {
    radius: usize,
    kernel: Vec<(I64Vec3, f32)>,
}

impl Brush {
    pub fn new(radius: usize) -> Self {
        let r = radius as i64;
        let side = radius.checked_mul(2).and_then(|d| d.checked_add(1));
        let capacity = side.and_then(|s| s.checked_pow(3)).unwrap_or(0);
        let mut kernel = Vec::with_capacity(capacity);
        for dx in -r..=r {
            for dy in -r..=r {
                for dz in -r..=r {
                    let offset = I64Vec3::new(dx, dy, dz);
                    let intensity = Self::falloff(radius, offset);
                    if intensity > 0.0 {
                        kernel.push((offset, intensity));
                    }
                }
            }
        }
        Self { radius, kernel }
    }

    /// Intensity `1 - d / radius` at Chebyshev distance `d`; a zero radius paints only the center.
    pub fn falloff(radius: usize, offset: I64Vec3) -> f32 {
        let distance = offset.abs().max_element();
        if radius == 0 {
            return if distance == 0 { 1.0 } else { 0.0 };
        }
        1.0 - distance as f32 / radius as f32
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Non-zero kernel entries as `(offset, intensity)` pairs.
    pub fn kernel(&self) -> &[(I64Vec3, f32)] {
        &self.kernel
    }
}

/// Splats every point of a trajectory into a fresh grid.
#[derive(Debug, Clone)]
pub struct VoxelGridRasterizer {
    grid_size: usize,
    brush: Brush,
}

impl VoxelGridRasterizer {
    pub fn new(config: &VoxelConfig) -> Self {
        Self {
            grid_size: config.grid_size,
            brush: Brush::new(config.brush_radius),
        }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    /// Rasterize `trajectory` under `params`. An empty trajectory yields an all-zero grid.
    pub fn rasterize(&self, trajectory: &Trajectory, params: &NormalizationParams) -> VoxelGrid {
        let mut grid = VoxelGrid::new(self.grid_size);
        for point in trajectory {
            self.stamp(&mut grid, params.voxel_center(point.position));
        }
        debug!(
            "Rasterized {} points into {} occupied voxels",
            trajectory.len(),
            grid.non_zero_count()
        );
        grid
    }

    /// Apply the brush centered at `center`, skipping voxels outside the grid on either side.
    pub fn stamp(&self, grid: &mut VoxelGrid, center: I64Vec3) {
        for &(offset, intensity) in self.brush.kernel() {
            if let Some(index) = grid.checked_index(center + offset) {
                grid.merge_max(index, intensity);
            }
        }
    }
}
