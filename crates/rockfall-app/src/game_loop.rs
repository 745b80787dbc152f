//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread so it never crosses threads.
//! Commands arrive via `mpsc` channel. Snapshots are stored in shared state
//! for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use rockfall_core::constants::TICK_RATE;
use rockfall_core::events::GameEvent;
use rockfall_core::state::GameStateSnapshot;
use rockfall_sim::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("rockfall-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();
    info!(seed = config.seed, "game loop started");

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&cmd_rx, &mut engine) {
            info!(tick = engine.time().tick, "game loop stopped");
            return;
        }

        // 2. Advance one tick
        let snapshot = engine.tick();
        log_events(&snapshot);

        // 3. Store latest snapshot for polling
        publish_snapshot(latest_snapshot, snapshot);

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            debug!(behind_ms = (now - next_tick_time).as_millis() as u64, "tick deadline reset");
            next_tick_time = now;
        }
    }
}

/// Replace the stored snapshot. A reader that panicked while holding the
/// lock leaves nothing half-written behind, so poisoning is ignored.
fn publish_snapshot(latest_snapshot: &Mutex<Option<GameStateSnapshot>>, snapshot: GameStateSnapshot) {
    *latest_snapshot.lock().unwrap_or_else(PoisonError::into_inner) = Some(snapshot);
}

/// Queue every waiting command. Returns false once the loop should stop.
fn drain_commands(cmd_rx: &mpsc::Receiver<GameLoopCommand>, engine: &mut SimulationEngine) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

fn log_events(snapshot: &GameStateSnapshot) {
    for event in &snapshot.events {
        match event {
            GameEvent::ShipRespawned => info!(tick = snapshot.time.tick, "ship back in play"),
            GameEvent::ShipDestroyed => info!(
                tick = snapshot.time.tick,
                ships_lost = snapshot.score.ships_lost,
                "ship lost"
            ),
            _ => {}
        }
    }
}
