//! Labeled gesture datasets.
//!
//! Training files follow the naming convention `<label>_<nn>.csv`; the label is the
//! file name prefix before the first underscore.

use crate::error::DataError;
use crate::samples::load_trajectory_from_path;
use crate::types::Trajectory;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Ordered set of gesture label names. A label's position is its class index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    names: Vec<String>,
}

impl LabelSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.names.iter().position(|n| n == label)
    }

    /// Resolve the class index encoded in a file name such as `beat3_12.csv`.
    pub fn label_of(&self, file_name: &str) -> Result<usize, DataError> {
        let prefix = file_name.split('_').next().unwrap_or(file_name);
        self.index_of(prefix).ok_or_else(|| DataError::UnknownLabel {
            file: file_name.to_string(),
            label: prefix.to_string(),
        })
    }

    /// One-hot target vector for a class index.
    pub fn one_hot(&self, index: usize) -> Vec<f32> {
        (0..self.names.len())
            .map(|i| if i == index { 1.0 } else { 0.0 })
            .collect()
    }
}

/// A trajectory paired with the class index of the gesture it records.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledTrajectory {
    /// File name the trajectory was read from.
    pub name: String,
    pub trajectory: Trajectory,
    pub label: usize,
}

/// Trait for sources that yield labeled trajectories one at a time.
pub trait DatasetSource {
    /// Labels used to encode each sample's class.
    fn labels(&self) -> &LabelSet;

    /// Get the next sample, or `None` once the source is exhausted.
    ///
    /// An error concerns only the sample being read; the source stays usable.
    fn next_sample(&mut self) -> Result<Option<LabeledTrajectory>, DataError>;
}

/// List the regular files in `dir` sorted by file name.
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn list_trajectory_files(dir: &Path) -> Result<Vec<PathBuf>, DataError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    debug!("Found {} files in {}", files.len(), dir.display());
    Ok(files)
}

/// File name component of `path` as UTF-8.
pub fn file_name_of(path: &Path) -> Result<&str, DataError> {
    path.file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| DataError::InvalidFileName(path.to_path_buf()))
}

/// A directory of labeled sample files.
#[derive(Debug, Clone)]
pub struct DirectoryDataset {
    labels: LabelSet,
    files: Vec<PathBuf>,
    cursor: usize,
}

impl DirectoryDataset {
    /// Scan `dir` (non-recursively) for sample files.
    pub fn open(dir: &Path, labels: LabelSet) -> Result<Self, DataError> {
        info!("Loading files from {}", dir.display());
        let files = list_trajectory_files(dir)?;
        Ok(Self {
            labels,
            files,
            cursor: 0,
        })
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Load and label a single file of this dataset.
    pub fn load_file(&self, path: &Path) -> Result<LabeledTrajectory, DataError> {
        let name = file_name_of(path)?;
        let label = self.labels.label_of(name)?;
        let trajectory = load_trajectory_from_path(path)?;
        Ok(LabeledTrajectory {
            name: name.to_string(),
            trajectory,
            label,
        })
    }

    /// Restart iteration from the first file.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

impl DatasetSource for DirectoryDataset {
    fn labels(&self) -> &LabelSet {
        &self.labels
    }

    fn next_sample(&mut self) -> Result<Option<LabeledTrajectory>, DataError> {
        let Some(path) = self.files.get(self.cursor) else {
            return Ok(None);
        };
        self.cursor += 1;
        self.load_file(path).map(Some)
    }
}
