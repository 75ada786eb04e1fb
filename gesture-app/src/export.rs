//! Plain-text export of feature vectors.

use crate::errors::AppError;
use gesture_voxel::{FeatureSink, FeatureVector, LabeledFeatures};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write a feature vector as one comma-separated line terminated by a newline.
pub fn write_feature_csv<W: Write>(mut writer: W, features: &FeatureVector) -> io::Result<()> {
    writeln!(writer, "{}", features.to_csv_line())
}

pub fn write_feature_file(path: &Path, features: &FeatureVector) -> Result<(), AppError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_feature_csv(&mut writer, features)?;
    writer.flush()?;
    Ok(())
}

/// Writes each sample to `<dir>/converted_<name>`.
#[derive(Debug, Clone)]
pub struct CsvDirectoryExporter {
    dir: PathBuf,
}

impl CsvDirectoryExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("converted_{name}"))
    }
}

// Implemented on the reference so rayon workers can share one exporter.
impl FeatureSink for &CsvDirectoryExporter {
    type Error = AppError;

    fn accept(&mut self, sample: LabeledFeatures) -> Result<(), AppError> {
        let path = self.output_path(&sample.name);
        write_feature_file(&path, &sample.features)?;
        debug!("Wrote {}", path.display());
        Ok(())
    }
}
