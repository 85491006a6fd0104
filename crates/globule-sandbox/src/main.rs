//! Headless Globule sandbox.
//!
//! Builds a tiny planet from the user's configuration, replays a scripted
//! painting session against it (or a built-in demo) and logs what ended up
//! on the planet. Nothing about the painted world is written to disk.
//!
//! Run with: `cargo run -p globule-sandbox -- --script session.ron`

mod replay;
mod script;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use globule_config::{CliArgs, Config};
use globule_planet::Planet;
use tracing::{error, info};

use crate::replay::{Replay, log_summary};
use crate::script::SessionScript;

/// CLI arguments for the sandbox binary.
#[derive(Parser, Debug)]
#[command(name = "globule-sandbox", about = "Replay a tiny-planet painting session")]
struct SandboxArgs {
    /// Session script (RON). Defaults to the built-in demo session.
    #[arg(long)]
    script: Option<PathBuf>,

    #[command(flatten)]
    config: CliArgs,
}

fn main() -> ExitCode {
    let args = SandboxArgs::parse();

    let config_dir = args
        .config
        .config
        .clone()
        .or_else(|| dirs::config_dir().map(|dir| dir.join("globule")));
    let config_dir = match config_dir {
        Some(dir) => dir,
        None => {
            eprintln!("Could not resolve a config directory; pass --config");
            return ExitCode::FAILURE;
        }
    };

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args.config);

    let log_dir = config_dir.join("logs");
    globule_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    if let Err(e) = config.validate() {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    let script = match &args.script {
        Some(path) => match SessionScript::load(path) {
            Ok(script) => script,
            Err(e) => {
                error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => SessionScript::demo(),
    };
    info!(steps = script.steps.len(), "Loaded session script");

    let mut planet = match Planet::new(&config) {
        Ok(planet) => planet,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let summary = Replay::new(&mut planet, config.planet.segments).run(&script);
    log_summary(&planet, &summary);

    ExitCode::SUCCESS
}
