//! Headless SKYRAID run: loads tuning, plays the scripted flight, prints a summary.
//!
//! Usage: `skyraid [config.toml] [seed]`

use std::process::ExitCode;

use log::{error, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use skyraid_app::demo;
use skyraid_app::render::LogRenderer;
use skyraid_app::state::AppContext;
use skyraid_core::config::FlightConfig;
use skyraid_core::constants::TARGET_FRAME_RATE;
use skyraid_procgen::{generate_city, CityConfig};
use skyraid_sim::engine::SimConfig;

#[derive(Serialize)]
struct RunSummary {
    frames: u64,
    elapsed_secs: f64,
    shots_fired: u32,
    enemies_destroyed: u32,
    enemies_remaining: u32,
    buildings: usize,
    stacked_buildings: usize,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let flight = match args.next() {
        Some(path) => {
            info!("loading tuning from {path}");
            FlightConfig::load_from_file(&path)?
        }
        None => FlightConfig::default(),
    };
    let seed = match args.next() {
        Some(raw) => raw.parse::<u64>()?,
        None => 42,
    };

    let city = generate_city(&mut ChaCha8Rng::seed_from_u64(seed), &CityConfig::default());

    let mut app = AppContext::new();
    app.start(SimConfig { seed, flight }, TARGET_FRAME_RATE, LogRenderer::default())?;

    for step in demo::flight_script() {
        std::thread::sleep(step.after);
        if let Some(phase) = app.latest_snapshot().map(|s| s.phase).filter(|p| p.is_terminal()) {
            warn!("session ended early ({phase:?}), skipping the rest of the script");
            break;
        }
        app.send(step.command)?;
    }

    // The final snapshot is the post-teardown one; keep the last live frame.
    let live = app.latest_snapshot();
    let renderer = app.shutdown()?;

    let summary = RunSummary {
        frames: renderer.map(|r| r.frames()).unwrap_or_default(),
        elapsed_secs: live.as_ref().map(|s| s.time.elapsed_secs).unwrap_or_default(),
        shots_fired: live.as_ref().map(|s| s.score.shots_fired).unwrap_or_default(),
        enemies_destroyed: live.as_ref().map(|s| s.score.enemies_destroyed).unwrap_or_default(),
        enemies_remaining: live.as_ref().map(|s| s.score.enemies_remaining).unwrap_or_default(),
        buildings: city.len(),
        stacked_buildings: city.iter().filter(|b| b.stacked_on.is_some()).count(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
