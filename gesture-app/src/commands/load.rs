//! Load command - builds the labeled feature matrix for a training directory.

use crate::errors::AppError;
use gesture_data::{DatasetSource, DirectoryDataset, LabelSet};
use gesture_voxel::{FeatureMatrix, FeatureSink, LabeledFeatures, VoxelEngine};
use std::path::Path;
use tracing::{info, warn};

/// Runs the load command.
///
/// Samples with bad data, unknown labels or no spatial extent are logged and skipped; any
/// other error stops the run.
pub fn run(engine: &VoxelEngine, dir: &Path, labels: LabelSet) -> Result<FeatureMatrix, AppError> {
    let mut dataset = DirectoryDataset::open(dir, labels)?;
    let mut matrix = FeatureMatrix::new(dataset.labels().clone());
    let mut skipped = 0;

    loop {
        let sample = match dataset.next_sample() {
            Ok(Some(sample)) => sample,
            Ok(None) => break,
            Err(e) => {
                skip_per_file("sample", e.into())?;
                skipped += 1;
                continue;
            }
        };

        match engine.voxelize(&sample.trajectory) {
            Ok(features) => matrix.accept(LabeledFeatures {
                name: sample.name,
                features,
                label: Some(sample.label),
            })?,
            Err(e) => {
                skip_per_file(&sample.name, e.into())?;
                skipped += 1;
            }
        }
    }

    info!(
        "Loaded {} samples from {} ({} skipped)",
        matrix.len(),
        dir.display(),
        skipped
    );
    for (label, count) in matrix.label_counts() {
        info!("  {label}: {count}");
    }
    Ok(matrix)
}

/// Log an error that only concerns one file, or hand back anything that should stop the run.
fn skip_per_file(name: &str, error: AppError) -> Result<(), AppError> {
    if !error.is_per_file() {
        return Err(error);
    }
    warn!("Skipping {}: {}", name, error);
    Ok(())
}
