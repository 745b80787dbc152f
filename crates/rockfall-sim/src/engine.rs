//! Simulation engine: the single simulation context.
//!
//! `SimulationEngine` owns the entity registry, the wave director, the RNG
//! and the player's ship handle, applies player commands at tick boundaries,
//! and produces a `GameStateSnapshot` per tick. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use rockfall_core::commands::PlayerCommand;
use rockfall_core::constants::{SHIP_RESPAWN_TICKS, SHIP_TURN_RATE};
use rockfall_core::events::GameEvent;
use rockfall_core::state::{GameStateSnapshot, ScoreView};
use rockfall_core::types::{PlayField, SimTime};

use crate::entities::{Entity, Ship, TextDisplay, TickerText};
use crate::registry::{EntityId, Registry};
use crate::timer::Timer;
use crate::wave::{WaveConfig, WaveDirector};

/// Rotation typed out by the pause menu ticker.
const PAUSE_TICKER_MESSAGES: [&str; 5] = [
    "Rockfall: A Retro Classic Redux",
    "Built From Scratch in Plain Rust",
    "Every Rock Worth Its Weight in Points",
    "For Your Vintage Gaming Pleasure",
    "How Do You Like Them Asteroids?",
];

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub field: PlayField,
    pub waves: WaveConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            field: PlayField::default(),
            waves: WaveConfig::default(),
        }
    }
}

/// The simulation engine. Owns the registry and all sim state.
pub struct SimulationEngine {
    registry: Registry,
    waves: WaveDirector,
    time: SimTime,
    field: PlayField,
    rng: ChaCha8Rng,
    ship: EntityId,
    points_hud: EntityId,
    pause_overlay: EntityId,
    pause_ticker: EntityId,
    respawn_timer: Timer<Ship>,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
    score: ScoreView,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config. Wave 1 is
    /// launched immediately.
    pub fn new(config: SimConfig) -> Self {
        let field = config.field;
        let mut registry = Registry::new();
        let mut events = Vec::new();

        let ship = registry.enqueue(Ship::new(field.center()));
        registry.enqueue(TextDisplay::new("Rockfall", field.at_fraction(0.1, 0.0)));
        let points_hud = registry.enqueue(TextDisplay::new("Points: 0", field.at_fraction(0.7, 0.0)));
        let pause_overlay = registry
            .enqueue(TextDisplay::centered("Press ESC Key", field.at_fraction(0.5, 0.5)).hidden());
        let pause_ticker = registry
            .enqueue(TickerText::new(field.at_fraction(0.5, 0.6), PAUSE_TICKER_MESSAGES).hidden());

        let spawn_point = field.center();
        let respawn_timer = Timer::stopped(SHIP_RESPAWN_TICKS, move |timer, ship: &mut Ship| {
            ship.respawn(spawn_point);
            timer.stop();
            timer.reset();
        });

        let waves = WaveDirector::new(config.waves, &mut registry, field, &mut events);

        info!(seed = config.seed, width = field.width, height = field.height, "simulation created");

        Self {
            registry,
            waves,
            time: SimTime::default(),
            field,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            ship,
            points_hud,
            pause_overlay,
            pause_ticker,
            respawn_timer,
            command_queue: VecDeque::new(),
            events,
            score: ScoreView::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        let live_asteroids = self
            .registry
            .update(self.field, &mut self.rng, &mut self.events);
        self.waves.update(
            live_asteroids,
            &mut self.registry,
            self.field,
            &mut self.rng,
            &mut self.events,
        );

        self.fold_events();
        self.tick_respawn();
        self.time.advance();

        GameStateSnapshot {
            time: self.time,
            paused: self.is_paused(),
            entities: self.registry.snapshot(),
            wave: self.waves.view(),
            score: self.score,
            events: std::mem::take(&mut self.events),
        }
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn score(&self) -> ScoreView {
        self.score
    }

    pub fn field(&self) -> PlayField {
        self.field
    }

    /// The pause menu is up: the ship is frozen as a ghost.
    pub fn is_paused(&self) -> bool {
        self.ship().is_some_and(Ship::is_ghost)
    }

    pub fn ship_id(&self) -> EntityId {
        self.ship
    }

    pub fn ship(&self) -> Option<&Ship> {
        self.registry.get_as::<Ship>(self.ship)
    }

    /// Get a read-only reference to the registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn waves(&self) -> &WaveDirector {
        &self.waves
    }

    pub fn respawn_pending(&self) -> bool {
        self.respawn_timer.is_enabled()
    }

    #[cfg(test)]
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. A ghosted ship only answers to the
    /// pause toggle.
    fn handle_command(&mut self, command: PlayerCommand) {
        let Some(ship) = self.registry.get_mut_as::<Ship>(self.ship) else {
            return;
        };
        if ship.is_ghost() && command != PlayerCommand::TogglePause {
            return;
        }

        match command {
            PlayerCommand::Turn { direction } => {
                ship.body_mut().set_turn_rate(SHIP_TURN_RATE, direction);
            }
            PlayerCommand::Accelerate { amount } => {
                ship.body_mut().accelerate(amount);
            }
            PlayerCommand::Fire => {
                if let Some(bullet) = ship.fire() {
                    self.registry.enqueue(bullet);
                    self.events.push(GameEvent::ShotFired);
                }
            }
            PlayerCommand::TogglePause => {
                let paused = ship.toggle_ghost();
                self.show_pause_menu(paused);
                info!(paused, tick = self.time.tick, "pause toggled");
            }
        }
    }

    /// Show or hide the pause overlay and its ticker.
    fn show_pause_menu(&mut self, shown: bool) {
        if let Some(overlay) = self.registry.get_mut_as::<TextDisplay>(self.pause_overlay) {
            overlay.set_visible(shown);
        }
        if let Some(ticker) = self.registry.get_mut_as::<TickerText>(self.pause_ticker) {
            ticker.set_enabled(shown);
        }
    }

    /// Fold this tick's events into the score.
    fn fold_events(&mut self) {
        let points_before = self.score.points;
        for event in &self.events {
            match event {
                GameEvent::ShotFired => self.score.shots_fired += 1,
                GameEvent::AsteroidDestroyed { .. } => self.score.asteroids_destroyed += 1,
                GameEvent::PointsAwarded { points } => self.score.points += points,
                GameEvent::ShipDestroyed => {
                    self.score.ships_lost += 1;
                    self.respawn_timer.start();
                }
                GameEvent::ShipRespawned | GameEvent::WaveLaunched { .. } => {}
            }
        }

        if self.score.points != points_before {
            if let Some(hud) = self.registry.get_mut_as::<TextDisplay>(self.points_hud) {
                hud.set_text(format!("Points: {}", self.score.points));
            }
        }
    }

    fn tick_respawn(&mut self) {
        let Some(ship) = self.registry.get_mut_as::<Ship>(self.ship) else {
            return;
        };
        if self.respawn_timer.tick(ship) {
            self.events.push(GameEvent::ShipRespawned);
            debug!(tick = self.time.tick, "ship respawned");
        }
    }
}
