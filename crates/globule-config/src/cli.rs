//! Command-line argument parsing for the Globule sandbox.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Globule command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "globule", about = "Globule tiny-planet sandbox")]
pub struct CliArgs {
    /// Planet radius in scene units.
    #[arg(long)]
    pub radius: Option<f32>,

    /// Terrain buffer edge length (power of two).
    #[arg(long)]
    pub resolution: Option<u32>,

    /// Terrain brush radius in texels.
    #[arg(long)]
    pub brush_radius: Option<u32>,

    /// Terrain brush falloff in texels.
    #[arg(long)]
    pub brush_falloff: Option<f32>,

    /// Milliseconds between structure drops while dragging.
    #[arg(long)]
    pub structure_interval_ms: Option<u64>,

    /// Seed for structure scale rolls.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(radius) = args.radius {
            self.planet.radius = radius;
        }
        if let Some(resolution) = args.resolution {
            self.terrain.resolution = resolution;
        }
        if let Some(radius) = args.brush_radius {
            self.terrain.brush.radius = radius;
        }
        if let Some(falloff) = args.brush_falloff {
            self.terrain.brush.falloff = falloff;
        }
        if let Some(interval) = args.structure_interval_ms {
            self.placement.structure_interval_ms = interval;
        }
        if let Some(seed) = args.seed {
            self.planet.seed = seed;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
