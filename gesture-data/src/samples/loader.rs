//! Trajectory loading functions

use crate::error::DataError;
use crate::samples::parse_sample_line;
use crate::types::Trajectory;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Load a trajectory from any buffered reader, one sample per line.
///
/// Zero lines yield an empty trajectory. The first malformed line aborts the load.
pub fn load_trajectory<R: BufRead>(reader: R) -> Result<Trajectory, DataError> {
    let mut points = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        points.push(parse_sample_line(&line, index + 1)?);
    }

    debug!("Parsed {} samples", points.len());
    Ok(Trajectory::new(points))
}

/// Load a trajectory from in-memory text.
pub fn parse_trajectory(text: &str) -> Result<Trajectory, DataError> {
    load_trajectory(text.as_bytes())
}

/// Load a trajectory from a sample file on disk.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_trajectory_from_path(path: &Path) -> Result<Trajectory, DataError> {
    debug!("Loading trajectory from: {}", path.display());
    let file = File::open(path)?;
    load_trajectory(BufReader::new(file))
}
