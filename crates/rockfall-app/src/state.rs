//! Application state shared between the driver and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;

use tracing::warn;

use rockfall_core::commands::PlayerCommand;
use rockfall_core::state::GameStateSnapshot;
use rockfall_sim::SimConfig;

use crate::game_loop;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handles to a running game loop.
///
/// `mpsc::Sender` is wrapped in a `Mutex` so the state can be shared by
/// reference across threads. The latest snapshot is shared with the game
/// loop thread, which replaces it after every tick.
pub struct AppState {
    /// `None` until `start` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub running: Mutex<bool>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
            handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop thread if it is not already running.
    pub fn start(&self, config: SimConfig) -> Result<(), String> {
        let mut running = self.running.lock().map_err(|e| e.to_string())?;
        if *running {
            return Err("Simulation already running".into());
        }

        let (cmd_tx, handle) = game_loop::spawn_game_loop(config, self.latest_snapshot.clone())
            .map_err(|e| format!("Failed to spawn game loop: {e}"))?;

        *self.command_tx.lock().map_err(|e| e.to_string())? = Some(cmd_tx);
        *self.handle.lock().map_err(|e| e.to_string())? = Some(handle);
        *running = true;
        Ok(())
    }

    /// Forward a player command to the simulation.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), String> {
        let tx_lock = self.command_tx.lock().map_err(|e| e.to_string())?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(GameLoopCommand::PlayerCommand(command))
                .map_err(|e| format!("Failed to send command: {e}")),
            None => Err("Simulation not started".into()),
        }
    }

    /// Clone of the most recent snapshot, if any tick has run yet.
    pub fn latest(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Stop the game loop and wait for its thread to exit.
    pub fn shutdown(&self) {
        if let Ok(mut tx_lock) = self.command_tx.lock() {
            if let Some(tx) = tx_lock.take() {
                let _ = tx.send(GameLoopCommand::Shutdown);
            }
        }
        let handle = self.handle.lock().ok().and_then(|mut lock| lock.take());
        if let Some(handle) = handle {
            if handle.join().is_err() {
                warn!("game loop thread panicked");
            }
        }
        if let Ok(mut running) = self.running.lock() {
            *running = false;
        }
    }
}
