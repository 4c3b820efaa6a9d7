//! # VOXFIELD Headless Generator
//!
//! Generates one world from a config file and reports what the renderer
//! would receive.
//!
//! ## Usage
//!
//! ```bash
//! voxfield --config world.toml --seed 42 --width 96 --height 48 --clamp
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use voxfield::{ParamRanges, WorldConfig, WorldSession};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            tracing::error!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    // Parse command line arguments (simple parsing, no external deps)
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;
    let mut seed: Option<u64> = None;
    let mut width: Option<i32> = None;
    let mut height: Option<i32> = None;
    let mut clamp = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                config_path = Some(value(&args, i)?.to_string());
                i += 1;
            }
            "--seed" | "-s" => {
                seed = Some(parse(&args, i)?);
                i += 1;
            }
            "--width" | "-w" => {
                width = Some(parse(&args, i)?);
                i += 1;
            }
            "--height" | "-H" => {
                height = Some(parse(&args, i)?);
                i += 1;
            }
            "--clamp" => clamp = true,
            "--help" | "-h" => {
                println!("Usage: voxfield [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config <PATH>    TOML world config (default: built-in defaults)");
                println!("  -s, --seed <N>         Override the noise seed");
                println!("  -w, --width <N>        Override the world width");
                println!("  -H, --height <N>       Override the world height");
                println!("      --clamp            Clamp all values into the editor ranges");
                println!("  -h, --help             Show this help");
                return Ok(());
            }
            other => return Err(format!("unknown argument: {other} (try --help)")),
        }
        i += 1;
    }

    let mut config = match &config_path {
        Some(path) => WorldConfig::load(path).map_err(|e| e.to_string())?,
        None => WorldConfig::default(),
    };
    if let Some(seed) = seed {
        config.params.seed = seed;
    }
    if let Some(width) = width {
        config.size.width = width;
    }
    if let Some(height) = height {
        config.size.height = height;
    }
    if clamp {
        config = config.clamped(&ParamRanges::default());
    }

    let session = WorldSession::new(config).map_err(|e| e.to_string())?;
    let snapshot = session.snapshot();
    let world = &snapshot.world;

    tracing::info!(
        "world {}x{}x{} seed {}",
        config.size.width,
        config.size.height,
        config.size.width,
        config.params.seed
    );
    tracing::info!(
        "{} solid blocks, {} instances ({:.1}% culled), {} bytes of instance data",
        world.grid.solid_count(),
        snapshot.batch.len(),
        world.culled_fraction() * 100.0,
        snapshot.batch.as_bytes().len()
    );

    Ok(())
}

fn value(args: &[String], i: usize) -> Result<&str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("{} needs a value", args[i]))
}

fn parse<T: std::str::FromStr>(args: &[String], i: usize) -> Result<T, String> {
    let raw = value(args, i)?;
    raw.parse()
        .map_err(|_| format!("invalid value for {}: {raw}", args[i]))
}
