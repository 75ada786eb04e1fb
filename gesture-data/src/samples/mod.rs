//! Comma-separated gesture sample parsing

mod line;
mod loader;

pub use line::parse_sample_line;
pub use loader::{load_trajectory, load_trajectory_from_path, parse_trajectory};
