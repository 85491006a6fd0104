//! Configuration for the Globule tiny-planet sandbox.
//!
//! Holds the static constants the painting engine is built from (planet
//! radius, terrain resolution, brush shapes, placement cadence, scale range).
//! Settings persist as a RON file and can be overridden from the command line.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    AnimationConfig, BrushConfig, Config, DebugConfig, PlacementConfig, PlanetConfig,
    TerrainConfig,
};
pub use error::ConfigError;
