//! CLI command implementations.

pub mod convert;
pub mod load;
pub mod voxelize;
