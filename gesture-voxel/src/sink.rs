//! Consumers of voxelized gestures.
//!
//! A classifier, an exporter or an in-memory training set all receive feature vectors
//! through [`FeatureSink`].

use crate::error::VoxelError;
use crate::flatten::FeatureVector;
use gesture_data::LabelSet;
use tracing::debug;

/// A feature vector together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledFeatures {
    /// File name of the source trajectory.
    pub name: String,
    pub features: FeatureVector,
    /// Class index into the run's [`LabelSet`], when known.
    pub label: Option<usize>,
}

/// Trait for anything that consumes voxelized gestures.
pub trait FeatureSink {
    type Error;

    fn accept(&mut self, sample: LabeledFeatures) -> Result<(), Self::Error>;
}

/// In-memory `(inputs, one-hot targets)` rows ready to hand to a classifier.
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    labels: LabelSet,
    names: Vec<String>,
    inputs: Vec<FeatureVector>,
    targets: Vec<Vec<f32>>,
    classes: Vec<usize>,
}

impl FeatureMatrix {
    pub fn new(labels: LabelSet) -> Self {
        Self {
            labels,
            names: Vec::new(),
            inputs: Vec::new(),
            targets: Vec::new(),
            classes: Vec::new(),
        }
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn inputs(&self) -> &[FeatureVector] {
        &self.inputs
    }

    pub fn targets(&self) -> &[Vec<f32>] {
        &self.targets
    }

    /// Number of rows per label, in label order.
    pub fn label_counts(&self) -> Vec<(&str, usize)> {
        self.labels
            .names()
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), self.classes.iter().filter(|c| **c == i).count()))
            .collect()
    }

    /// Split into raw input rows and target rows.
    pub fn into_parts(self) -> (Vec<Vec<f32>>, Vec<Vec<f32>>) {
        let inputs = self.inputs.into_iter().map(FeatureVector::into_vec).collect();
        (inputs, self.targets)
    }
}

impl FeatureSink for FeatureMatrix {
    type Error = VoxelError;

    fn accept(&mut self, sample: LabeledFeatures) -> Result<(), VoxelError> {
        let label = sample.label.ok_or_else(|| VoxelError::Unlabeled(sample.name.clone()))?;
        if label >= self.labels.len() {
            return Err(VoxelError::UnknownClass {
                name: sample.name,
                index: label,
                classes: self.labels.len(),
            });
        }
        if let Some(first) = self.inputs.first() {
            if first.len() != sample.features.len() {
                return Err(VoxelError::GridSizeMismatch {
                    expected: first.len(),
                    actual: sample.features.len(),
                });
            }
        }

        debug!("Adding '{}' as class {}", sample.name, label);
        self.targets.push(self.labels.one_hot(label));
        self.classes.push(label);
        self.inputs.push(sample.features);
        self.names.push(sample.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::VoxelGrid;

    fn sample(name: &str, size: usize, label: Option<usize>) -> LabeledFeatures {
        LabeledFeatures {
            name: name.to_string(),
            features: FeatureVector::from(VoxelGrid::new(size)),
            label,
        }
    }

    #[test]
    fn test_matrix_collects_rows() {
        let mut matrix = FeatureMatrix::new(LabelSet::new(["beat2", "beat3", "beat4"]));
        matrix.accept(sample("beat3_01.csv", 3, Some(1))).unwrap();
        matrix.accept(sample("beat4_01.csv", 3, Some(2))).unwrap();
        matrix.accept(sample("beat3_02.csv", 3, Some(1))).unwrap();

        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix.targets()[0], vec![0.0, 1.0, 0.0]);
        assert_eq!(
            matrix.label_counts(),
            vec![("beat2", 0), ("beat3", 2), ("beat4", 1)]
        );

        let (inputs, targets) = matrix.into_parts();
        assert_eq!(inputs.len(), 3);
        assert_eq!(inputs[0].len(), 27);
        assert_eq!(targets[1], vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_matrix_rejects_unlabeled() {
        let mut matrix = FeatureMatrix::new(LabelSet::new(["a"]));
        let err = matrix.accept(sample("a_01.csv", 2, None)).unwrap_err();
        assert!(matches!(err, VoxelError::Unlabeled(name) if name == "a_01.csv"));
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_matrix_rejects_class_outside_labels() {
        let mut matrix = FeatureMatrix::new(LabelSet::new(["a", "b"]));
        let err = matrix.accept(sample("a_01.csv", 2, Some(7))).unwrap_err();
        assert!(matches!(
            err,
            VoxelError::UnknownClass {
                index: 7,
                classes: 2,
                ..
            }
        ));
        assert!(matrix.is_empty());
        assert!(matrix.targets().is_empty());
    }

    #[test]
    fn test_matrix_rejects_mixed_sizes() {
        let mut matrix = FeatureMatrix::new(LabelSet::new(["a"]));
        matrix.accept(sample("a_01.csv", 2, Some(0))).unwrap();
        let err = matrix.accept(sample("a_02.csv", 3, Some(0))).unwrap_err();
        assert!(matches!(
            err,
            VoxelError::GridSizeMismatch {
                expected: 8,
                actual: 27
            }
        ));
    }
}
