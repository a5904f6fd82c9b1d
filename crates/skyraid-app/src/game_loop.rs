//! Game loop thread. Ticks the simulation at a target rate and renders frames.
//!
//! The engine is created inside this thread and never leaves it.
//! Commands arrive via `mpsc` channel. Each tick measures its delta on a
//! monotonic clock, hands the snapshot to the renderer once the session is
//! playable, and stores it in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info};

use skyraid_core::enums::GamePhase;
use skyraid_core::state::FrameSnapshot;
use skyraid_sim::engine::{SimConfig, SimulationEngine};

use crate::render::Renderer;
use crate::state::GameLoopCommand;

/// Nominal duration of one tick at `rate` Hz.
pub fn tick_duration(rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(rate.max(1)))
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle. The thread returns its
/// renderer when it stops.
pub fn spawn_game_loop<R>(
    config: SimConfig,
    rate: u32,
    renderer: R,
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<R>)>
where
    R: Renderer + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("skyraid-game-loop".into())
        .spawn(move || {
            let engine = SimulationEngine::new(config);
            run_game_loop(engine, renderer, cmd_rx, &latest_snapshot, tick_duration(rate))
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until a Shutdown command or channel disconnect.
fn run_game_loop<R: Renderer>(
    mut engine: SimulationEngine,
    mut renderer: R,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
    frame_duration: Duration,
) -> R {
    let mut last_frame = Instant::now();
    let mut next_tick_time = last_frame;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Sim(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    shutdown(&mut engine, &mut renderer, latest_snapshot);
                    return renderer;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one frame by the measured delta
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;
        step(&mut engine, &mut renderer, latest_snapshot, dt);

        // 3. Sleep until the next tick
        next_tick_time += frame_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > frame_duration * 2 {
            // Too far behind, reset instead of catching up
            next_tick_time = now;
        }
    }
}

/// Tick the engine once, render if playable, and publish the snapshot.
pub fn step<R: Renderer>(
    engine: &mut SimulationEngine,
    renderer: &mut R,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
    dt: f64,
) -> GamePhase {
    let snapshot = engine.tick(dt);
    let phase = snapshot.phase;

    if phase == GamePhase::Playable {
        renderer.render(&snapshot);
    }

    if let Ok(mut lock) = latest_snapshot.lock() {
        *lock = Some(snapshot);
    }
    phase
}

/// Dispose the engine, flush the final frame, release the renderer.
fn shutdown<R: Renderer>(
    engine: &mut SimulationEngine,
    renderer: &mut R,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) {
    if engine.dispose() {
        debug!("engine disposed by game loop");
    }
    let last = engine.tick(0.0);
    renderer.render(&last);
    renderer.dispose();
    if let Ok(mut lock) = latest_snapshot.lock() {
        *lock = Some(last);
    }
    info!("game loop stopped");
}
