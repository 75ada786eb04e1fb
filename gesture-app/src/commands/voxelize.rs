//! Voxelize command - converts a single trajectory file.

use crate::errors::AppError;
use crate::export::write_feature_file;
use gesture_data::load_trajectory_from_path;
use gesture_voxel::{VoxelEngine, unflatten};
use std::path::Path;
use tracing::info;

/// Occupancy summary of one voxelized trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelizeSummary {
    pub samples: usize,
    pub occupied: usize,
    pub max_value: f32,
    pub peak: Option<[usize; 3]>,
}

/// Runs the voxelize command.
///
/// Writes the CSV export to `output` when given, otherwise only reports the summary.
pub fn run(
    engine: &VoxelEngine,
    file: &Path,
    output: Option<&Path>,
) -> Result<VoxelizeSummary, AppError> {
    let trajectory = load_trajectory_from_path(file)?;
    let features = engine.voxelize(&trajectory)?;

    if let Some(output) = output {
        write_feature_file(output, &features)?;
        info!("Wrote {} features to {}", features.len(), output.display());
    }

    let grid = unflatten(&features, engine.config().grid_size)?;
    let summary = VoxelizeSummary {
        samples: trajectory.len(),
        occupied: grid.non_zero_count(),
        max_value: grid.max_value(),
        peak: grid.argmax(),
    };

    info!(
        "{}: {} samples, {} of {} voxels occupied",
        file.display(),
        summary.samples,
        summary.occupied,
        grid.len()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gesture_voxel::VoxelConfig;
    use std::fs;

    #[test]
    fn test_voxelize_file_with_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("beat2_01.csv");
        let output = dir.path().join("out.csv");
        fs::write(&input, "0,0,0\n10,0,0\n").unwrap();

        let engine = VoxelEngine::new(VoxelConfig::new(50, 0).unwrap()).unwrap();
        let summary = run(&engine, &input, Some(&output)).unwrap();

        assert_eq!(summary.samples, 2);
        assert_eq!(summary.occupied, 2);
        assert_eq!(summary.max_value, 1.0);
        assert_eq!(summary.peak, Some([0, 25, 25]));

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written.trim_end().split(',').count(), 125_000);
    }

    #[test]
    fn test_voxelize_degenerate_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("still.csv");
        fs::write(&input, "0,0,0\n0,0,0\n").unwrap();

        let err = run(&VoxelEngine::default(), &input, None).unwrap_err();
        assert!(err.is_per_file());
    }
}
