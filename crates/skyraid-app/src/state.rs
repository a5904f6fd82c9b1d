//! Application context: the explicit owner of a running session.
//!
//! Whatever hosts the frame loop holds an `AppContext`; there is no global
//! handle to the engine.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use log::info;
use thiserror::Error;

use skyraid_core::commands::SimCommand;
use skyraid_core::state::FrameSnapshot;
use skyraid_sim::engine::SimConfig;

use crate::game_loop;
use crate::render::Renderer;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A command to forward to the simulation engine.
    Sim(SimCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("game loop already running")]
    AlreadyRunning,

    #[error("game loop not started")]
    NotRunning,

    #[error("game loop stopped receiving commands")]
    ChannelClosed,

    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("game loop thread panicked")]
    LoopPanicked,
}

/// A running session: command channel, loop thread and latest snapshot.
pub struct AppContext<R> {
    command_tx: Option<mpsc::Sender<GameLoopCommand>>,
    handle: Option<JoinHandle<R>>,
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
}

impl<R> Default for AppContext<R> {
    fn default() -> Self {
        Self {
            command_tx: None,
            handle: None,
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl<R: Renderer + Send + 'static> AppContext<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the game loop thread.
    pub fn start(&mut self, config: SimConfig, rate: u32, renderer: R) -> Result<(), AppError> {
        if self.command_tx.is_some() {
            return Err(AppError::AlreadyRunning);
        }
        let (tx, handle) =
            game_loop::spawn_game_loop(config, rate, renderer, self.latest_snapshot.clone())?;
        self.command_tx = Some(tx);
        self.handle = Some(handle);
        info!("game loop started at {rate} Hz");
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.command_tx.is_some()
    }

    /// Forward a command to the simulation.
    pub fn send(&self, command: SimCommand) -> Result<(), AppError> {
        let tx = self.command_tx.as_ref().ok_or(AppError::NotRunning)?;
        tx.send(GameLoopCommand::Sim(command))
            .map_err(|_| AppError::ChannelClosed)
    }

    /// Latest snapshot published by the loop, if any.
    pub fn latest_snapshot(&self) -> Option<FrameSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }

    /// Stop the loop and wait for it. Returns the renderer on the first call
    /// and `None` on later calls.
    pub fn shutdown(&mut self) -> Result<Option<R>, AppError> {
        let Some(tx) = self.command_tx.take() else {
            return Ok(None);
        };
        // A closed channel means the loop already stopped on its own.
        let _ = tx.send(GameLoopCommand::Shutdown);

        match self.handle.take() {
            Some(handle) => handle
                .join()
                .map(Some)
                .map_err(|_| AppError::LoopPanicked),
            None => Ok(None),
        }
    }
}

impl<R> Drop for AppContext<R> {
    fn drop(&mut self) {
        if let Some(tx) = self.command_tx.take() {
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
