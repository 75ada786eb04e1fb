//! Gesture Voxelizer
//!
//! Command-line front end for turning recorded 3D gesture trajectories into dense
//! voxel feature vectors.
//!
//! Features:
//! - Single-file voxelization with an occupancy summary
//! - Parallel directory conversion to one-line CSV exports
//! - Labeled feature matrix loading for an external classifier

mod commands;
mod config;
mod errors;
mod export;

use clap::{Parser, Subcommand};
use config::{AppConfig, ConfigOverrides, LoggingConfig};
use errors::AppError;
use gesture_voxel::VoxelEngine;
use std::path::PathBuf;
use tracing::info;

/// Gesture Voxelizer - 3D trajectory to voxel feature vector conversion
#[derive(Parser, Debug)]
#[command(name = "gesture")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Voxels per side of the cubic grid
    #[arg(long, global = true)]
    grid_size: Option<usize>,

    /// Brush radius in voxels
    #[arg(long, global = true)]
    brush_radius: Option<usize>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Gesture label, in class order (repeatable)
    #[arg(long = "label", global = true)]
    labels: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Voxelize a single trajectory file
    Voxelize {
        /// Trajectory file, one `x,y,z` sample per line
        file: PathBuf,

        /// Write the feature vector as one CSV line to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Voxelize every file in a directory into `converted_<name>` exports
    Convert {
        /// Directory of trajectory files
        from: PathBuf,

        /// Output directory, created if missing
        to: PathBuf,
    },

    /// Build the labeled feature matrix for a directory of `<label>_<nn>.csv` files
    Load {
        /// Directory of labeled trajectory files
        dir: PathBuf,
    },
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            grid_size: self.grid_size,
            brush_radius: self.brush_radius,
            log_level: self.log_level.clone(),
            labels: self.labels.clone(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match config::resolve(cli.config.as_deref(), cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(2);
        }
    };

    init_logging(&config.logging);

    if let Err(e) = run(cli.command, &config) {
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Command, config: &AppConfig) -> Result<(), AppError> {
    let engine = VoxelEngine::new(config.voxel)?;
    info!(
        "Grid {}³, brush radius {}",
        config.voxel.grid_size, config.voxel.brush_radius
    );

    match command {
        Command::Voxelize { file, output } => {
            let summary = commands::voxelize::run(&engine, &file, output.as_deref())?;
            println!(
                "{}: {} samples, {} occupied voxels, max {:.3}, peak {:?}",
                file.display(),
                summary.samples,
                summary.occupied,
                summary.max_value,
                summary.peak
            );
        }
        Command::Convert { from, to } => {
            let summary = commands::convert::run(&engine, &from, &to)?;
            println!("converted {}, skipped {}", summary.converted, summary.skipped);
        }
        Command::Load { dir } => {
            let matrix = commands::load::run(&engine, &dir, config.label_set())?;
            for (label, count) in matrix.label_counts() {
                println!("{label}: {count}");
            }
            println!("{} samples x {} features", matrix.len(), config.voxel.voxel_count());
        }
    }
    Ok(())
}

/// Log to stderr, optionally mirroring spans to Tracy. `RUST_LOG` overrides the configured level.
fn init_logging(logging: &LoggingConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let stderr = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let subscriber = tracing_subscriber::registry()
        .with(env_filter(&logging.level))
        .with(stderr);

    #[cfg(feature = "tracy")]
    if logging.enable_tracy {
        subscriber.with(tracing_tracy::TracyLayer::default()).init();
        return;
    }

    subscriber.init();
}

fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert_with_overrides() {
        let cli = Cli::parse_from([
            "gesture",
            "convert",
            "train",
            "out",
            "--grid-size",
            "32",
            "--label",
            "circle",
            "--label",
            "swipe",
        ]);
        let overrides = cli.overrides();
        assert_eq!(overrides.grid_size, Some(32));
        assert_eq!(overrides.labels, vec!["circle", "swipe"]);
        assert!(matches!(cli.command, Command::Convert { .. }));
    }

    #[test]
    fn test_env_filter_falls_back_to_configured_level() {
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(env_filter("debug").to_string(), "debug");
        }
    }
}
