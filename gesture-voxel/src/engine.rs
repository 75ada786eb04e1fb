//! Voxelization entry point.

use crate::bounds::NormalizationParams;
use crate::config::{ConfigError, VoxelConfig};
use crate::error::VoxelError;
use crate::flatten::FeatureVector;
use crate::raster::{VoxelGrid, VoxelGridRasterizer};
use gesture_data::{Trajectory, load_trajectory};
use std::io::BufRead;
use tracing::debug;

/// Voxelizes trajectories under one validated configuration.
///
/// The engine holds no per-trajectory state, so a shared reference can serve any number
/// of threads at once.
#[derive(Debug, Clone)]
pub struct VoxelEngine {
    config: VoxelConfig,
    rasterizer: VoxelGridRasterizer,
}

impl VoxelEngine {
    /// Validate `config` and build an engine for it.
    pub fn new(config: VoxelConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rasterizer: VoxelGridRasterizer::new(&config),
        })
    }

    pub fn config(&self) -> &VoxelConfig {
        &self.config
    }

    pub fn normalize(&self, trajectory: &Trajectory) -> Result<NormalizationParams, VoxelError> {
        NormalizationParams::from_trajectory(trajectory, self.config.grid_size)
    }

    /// Normalize and rasterize. An empty trajectory gives an all-zero grid.
    pub fn rasterize(&self, trajectory: &Trajectory) -> Result<VoxelGrid, VoxelError> {
        if trajectory.is_empty() {
            debug!("Empty trajectory, returning blank grid");
            return Ok(VoxelGrid::new(self.config.grid_size));
        }
        let params = self.normalize(trajectory)?;
        Ok(self.rasterizer.rasterize(trajectory, &params))
    }

    /// Produce the feature vector for a trajectory.
    pub fn voxelize(&self, trajectory: &Trajectory) -> Result<FeatureVector, VoxelError> {
        self.rasterize(trajectory).map(FeatureVector::from)
    }

    /// Parse samples from `reader` and voxelize them.
    pub fn voxelize_reader<R: BufRead>(&self, reader: R) -> Result<FeatureVector, VoxelError> {
        let trajectory = load_trajectory(reader)?;
        self.voxelize(&trajectory)
    }
}

impl Default for VoxelEngine {
    fn default() -> Self {
        let config = VoxelConfig::default();
        Self {
            config,
            rasterizer: VoxelGridRasterizer::new(&config),
        }
    }
}

/// One-shot voxelization with explicit parameters.
pub fn voxelize(
    trajectory: &Trajectory,
    grid_size: usize,
    brush_radius: usize,
) -> Result<FeatureVector, VoxelError> {
    let engine = VoxelEngine::new(VoxelConfig::new(grid_size, brush_radius)?)?;
    engine.voxelize(trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::BoundingBox;
    use crate::flatten::unflatten;
    use gesture_data::Point3D;
    use proptest::prelude::*;

    fn trajectory(points: &[[f64; 3]]) -> Trajectory {
        points.iter().copied().map(Point3D::from).collect()
    }

    #[test]
    fn test_two_point_example() {
        let features = voxelize(&trajectory(&[[0.0, 0.0, 0.0], [10.0, 0.0, 0.0]]), 50, 0).unwrap();
        assert_eq!(features.len(), 125_000);

        let grid = unflatten(&features, 50).unwrap();
        assert_eq!(grid.non_zero_count(), 2);
        assert_eq!(grid.get(0, 25, 25), Some(1.0));
        assert_eq!(grid.get(49, 25, 25), Some(1.0));
    }

    #[test]
    fn test_empty_trajectory_is_blank() {
        let engine = VoxelEngine::default();
        let features = engine.voxelize(&Trajectory::default()).unwrap();
        assert_eq!(features.len(), 50 * 50 * 50);
        assert!(features.as_slice().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_identical_points_at_origin_are_degenerate() {
        let engine = VoxelEngine::default();
        let result = engine.voxelize(&trajectory(&[[0.0, 0.0, 0.0]; 3]));
        assert!(matches!(result, Err(VoxelError::DegenerateTrajectory { .. })));
    }

    #[test]
    fn test_single_point_zero_brush() {
        let features = voxelize(&trajectory(&[[3.0, -1.0, 2.0]]), 20, 0).unwrap();
        let nonzero: Vec<f32> = features.as_slice().iter().copied().filter(|v| *v != 0.0).collect();
        assert_eq!(nonzero, vec![1.0]);
    }

    #[test]
    fn test_invalid_configuration() {
        let result = voxelize(&trajectory(&[[1.0, 1.0, 1.0]]), 1, 0);
        assert!(matches!(result, Err(VoxelError::Configuration(ConfigError::GridTooSmall(1)))));
        assert!(VoxelEngine::new(VoxelConfig { grid_size: 8, brush_radius: 9 }).is_err());
    }

    #[test]
    fn test_voxelize_reader() {
        let engine = VoxelEngine::new(VoxelConfig::new(10, 1).unwrap()).unwrap();
        let features = engine.voxelize_reader("0,0,0\n1,1,1\n".as_bytes()).unwrap();
        let grid = unflatten(&features, 10).unwrap();
        assert_eq!(grid.get(0, 0, 0), Some(1.0));
        assert_eq!(grid.get(9, 9, 9), Some(1.0));
    }

    #[test]
    fn test_voxelize_reader_malformed() {
        let engine = VoxelEngine::default();
        let result = engine.voxelize_reader("0,0,0\n1,x,1\n".as_bytes());
        assert!(matches!(result, Err(VoxelError::Data(_))));
    }

    #[test]
    fn test_merged_points_equal_pointwise_max() {
        let engine = VoxelEngine::new(VoxelConfig::new(30, 4).unwrap()).unwrap();
        let both = trajectory(&[[-2.0, 1.0, 0.5], [1.0, 1.5, 0.0]]);
        let params = engine.normalize(&both).unwrap();

        let raster = VoxelGridRasterizer::new(engine.config());
        let a = raster.rasterize(&trajectory(&[[-2.0, 1.0, 0.5]]), &params);
        let b = raster.rasterize(&trajectory(&[[1.0, 1.5, 0.0]]), &params);
        let merged = raster.rasterize(&both, &params);

        assert_eq!(Some(merged), a.max_with(&b));
    }

    fn point() -> impl Strategy<Value = [f64; 3]> {
        [-100.0f64..100.0, -100.0f64..100.0, -100.0f64..100.0]
    }

    proptest! {
        #[test]
        fn prop_values_in_unit_range_and_length_fixed(
            points in prop::collection::vec(point(), 0..40),
            grid_size in 2usize..24,
            brush_radius in 0usize..6,
        ) {
            prop_assume!(brush_radius < grid_size);
            let traj = trajectory(&points);
            match voxelize(&traj, grid_size, brush_radius) {
                Ok(features) => {
                    prop_assert_eq!(features.len(), grid_size.pow(3));
                    prop_assert!(features.as_slice().iter().all(|v| (0.0..=1.0).contains(v)));
                }
                Err(VoxelError::DegenerateTrajectory { .. }) => {
                    prop_assert_eq!(BoundingBox::from_trajectory(&traj).largest_span(), 0.0);
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }

        #[test]
        fn prop_voxelize_is_deterministic(points in prop::collection::vec(point(), 1..20)) {
            let traj = trajectory(&points);
            let first = voxelize(&traj, 16, 2);
            let second = voxelize(&traj, 16, 2);
            if let (Ok(a), Ok(b)) = (first, second) {
                prop_assert_eq!(a, b);
            }
        }
    }
}
