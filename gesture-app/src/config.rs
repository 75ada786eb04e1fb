//! Run configuration: optional JSON file, then command-line overrides.

use crate::errors::AppError;
use gesture_data::LabelSet;
use gesture_voxel::VoxelConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub enable_tracy: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_tracy: false,
        }
    }
}

/// Everything a run needs, shared read-only by all workers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub voxel: VoxelConfig,
    /// Gesture labels; training files are named `<label>_<nn>.csv`.
    pub labels: Vec<String>,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            voxel: VoxelConfig::default(),
            labels: vec!["beat2".into(), "beat3".into(), "beat4".into()],
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read a JSON config file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        debug!("Loading config from {}", path.display());
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn label_set(&self) -> LabelSet {
        LabelSet::new(self.labels.iter().cloned())
    }
}

/// Values given on the command line; each one replaces the config file's.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub grid_size: Option<usize>,
    pub brush_radius: Option<usize>,
    pub log_level: Option<String>,
    pub labels: Vec<String>,
}

impl ConfigOverrides {
    pub fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(grid_size) = self.grid_size {
            config.voxel.grid_size = grid_size;
        }
        if let Some(brush_radius) = self.brush_radius {
            config.voxel.brush_radius = brush_radius;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
        if !self.labels.is_empty() {
            config.labels = self.labels;
        }
        config
    }
}

/// Load `path` if given, apply overrides and validate the voxel settings.
pub fn resolve(path: Option<&Path>, overrides: ConfigOverrides) -> Result<AppConfig, AppError> {
    let base = match path {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let config = overrides.apply(base);
    config.voxel.validate()?;
    Ok(config)
}
