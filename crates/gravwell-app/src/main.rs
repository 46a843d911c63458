use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use gravwell_app::autopilot::Autopilot;
use gravwell_app::game_loop::{run_game_loop, LoopOptions};
use gravwell_core::config::SimConfig;
use gravwell_sim::SimulationEngine;

/// Headless GRAVWELL run driven by a scripted autopilot
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON config file; missing fields take their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed, overrides the config
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Pace frames to 60 Hz and feed the measured frame time
    #[arg(long)]
    realtime: bool,

    /// Print the final snapshot as JSON
    #[arg(long)]
    dump_snapshot: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(&args)?;
    let mut engine = SimulationEngine::new(config).context("starting simulation")?;
    let mut pilot = Autopilot::new();

    let summary = run_game_loop(
        &mut engine,
        &mut pilot,
        LoopOptions {
            frames: args.frames,
            realtime: args.realtime,
        },
        |_| false,
    );

    log::info!(
        "Ran {} frames: {} shots, {} captures, {} rounds left",
        summary.frames,
        summary.shots,
        summary.captures,
        engine.ammo()
    );

    if args.dump_snapshot {
        let json = serde_json::to_string_pretty(&summary.last_snapshot)
            .context("serializing final snapshot")?;
        println!("{json}");
    }

    Ok(())
}
