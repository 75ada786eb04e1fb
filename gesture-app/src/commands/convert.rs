//! Convert command - voxelizes every file in a directory and exports the results.

use crate::errors::AppError;
use crate::export::CsvDirectoryExporter;
use gesture_data::{file_name_of, list_trajectory_files, load_trajectory_from_path};
use gesture_voxel::{FeatureSink, LabeledFeatures, VoxelEngine};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Outcome counts of a conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    pub converted: usize,
    pub skipped: usize,
}

/// Runs the convert command.
///
/// Files are voxelized in parallel, one task per file. Files that cannot be voxelized
/// are logged and skipped; I/O failures abort the run.
pub fn run(engine: &VoxelEngine, from: &Path, to: &Path) -> Result<ConvertSummary, AppError> {
    info!("Converting files from {}", from.display());
    let files = list_trajectory_files(from)?;
    fs::create_dir_all(to)?;
    let exporter = CsvDirectoryExporter::new(to);

    let outcomes: Vec<_> = files
        .par_iter()
        .map(|path| (path, convert_file(engine, &exporter, path)))
        .collect();

    let mut summary = ConvertSummary::default();
    for (path, outcome) in outcomes {
        match outcome {
            Ok(()) => summary.converted += 1,
            Err(e) if e.is_per_file() => {
                warn!("Skipping {}: {}", path.display(), e);
                summary.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Converted {} files into {} ({} skipped)",
        summary.converted,
        to.display(),
        summary.skipped
    );
    Ok(summary)
}

fn convert_file(
    engine: &VoxelEngine,
    exporter: &CsvDirectoryExporter,
    path: &Path,
) -> Result<(), AppError> {
    let name = file_name_of(path)?.to_string();
    let trajectory = load_trajectory_from_path(path)?;
    let features = engine.voxelize(&trajectory)?;

    let mut sink = exporter;
    sink.accept(LabeledFeatures {
        name,
        features,
        label: None,
    })
}
