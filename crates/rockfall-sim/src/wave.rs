//! Wave director: paces asteroid spawning into escalating waves.
//!
//! A wave is launched when the field is clear and nothing is left to spawn.
//! Its asteroids are then trickled in from off-screen entry points, one
//! batch per trickle interval, so they drift onto the field over time.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use rockfall_core::constants::{
    WAVE_ANNOUNCE_TICKS, WAVE_ASTEROID_MIN_SPEED, WAVE_BASE_COUNT, WAVE_BATCHES,
    WAVE_MAX_ASTEROIDS, WAVE_TRICKLE_INTERVAL_TICKS,
};
use rockfall_core::events::GameEvent;
use rockfall_core::state::WaveView;
use rockfall_core::types::PlayField;

use crate::entities::asteroid::random_size;
use crate::entities::{Asteroid, TextDisplay};
use crate::registry::Registry;
use crate::timer::Timer;

/// Wave tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// Asteroids in wave 1. Wave N gets N times this.
    pub base_count: u32,
    /// Cap on asteroids in any one wave.
    pub max_per_wave: u32,
    /// Ticks between trickle batches.
    pub trickle_interval: u32,
    /// Ticks the "Wave N" banner stays up.
    pub announce_ticks: u32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            base_count: WAVE_BASE_COUNT,
            max_per_wave: WAVE_MAX_ASTEROIDS,
            trickle_interval: WAVE_TRICKLE_INTERVAL_TICKS,
            announce_ticks: WAVE_ANNOUNCE_TICKS,
        }
    }
}

impl WaveConfig {
    /// Asteroids in wave `wave`, clamped to the cap.
    pub fn wave_total(&self, wave: u32) -> u32 {
        wave.saturating_mul(self.base_count).min(self.max_per_wave)
    }

    /// Copy with every count raised to at least one. A wave of zero rocks
    /// would be over as soon as it launched, so a fresh wave would follow
    /// on every tick.
    pub fn validated(self) -> Self {
        let fixed = Self {
            base_count: self.base_count.max(1),
            max_per_wave: self.max_per_wave.max(1),
            trickle_interval: self.trickle_interval.max(1),
            ..self
        };
        if fixed != self {
            warn!(
                base_count = self.base_count,
                max_per_wave = self.max_per_wave,
                trickle_interval = self.trickle_interval,
                "wave config counts raised to 1"
            );
        }
        fixed
    }

    /// Asteroids per trickle batch. Never zero, so small waves still spawn.
    pub fn batch_size(&self, total: u32) -> u32 {
        (total / WAVE_BATCHES).max(1)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct WaveProgress {
    wave: u32,
    total: u32,
    /// Not yet released by the trickle timer.
    remaining: u32,
    spawned: u32,
    /// Released by the trickle timer, waiting to be placed.
    due: u32,
    batch: u32,
}

/// An off-screen spawn point and the headings that carry a rock onto the field.
struct EntryPoint {
    fx: f32,
    fy: f32,
    /// Offset in field units past the fractional position.
    offset: Vec2,
    heading_min: f32,
    heading_max: f32,
}

impl EntryPoint {
    fn position(&self, field: PlayField) -> Vec2 {
        field.at_fraction(self.fx, self.fy) + self.offset
    }
}

const ENTRY_POINTS: [EntryPoint; 5] = [
    // Left edge, upper quarter, drifting right and down.
    EntryPoint {
        fx: 0.0,
        fy: 0.25,
        offset: Vec2::new(-40.0, 0.0),
        heading_min: 90.0,
        heading_max: 120.0,
    },
    EntryPoint {
        fx: 0.0,
        fy: 0.85,
        offset: Vec2::new(-40.0, 0.0),
        heading_min: 60.0,
        heading_max: 90.0,
    },
    EntryPoint {
        fx: 1.0,
        fy: 0.35,
        offset: Vec2::new(20.0, 0.0),
        heading_min: 240.0,
        heading_max: 290.0,
    },
    EntryPoint {
        fx: 1.0,
        fy: 0.75,
        offset: Vec2::new(20.0, 0.0),
        heading_min: 240.0,
        heading_max: 290.0,
    },
    // Top edge, centre, falling.
    EntryPoint {
        fx: 0.5,
        fy: 0.0,
        offset: Vec2::new(0.0, -40.0),
        heading_min: 150.0,
        heading_max: 210.0,
    },
];

pub struct WaveDirector {
    config: WaveConfig,
    progress: WaveProgress,
    trickle: Timer<WaveProgress>,
}

impl WaveDirector {
    /// Build the director and launch wave 1.
    pub fn new(
        config: WaveConfig,
        registry: &mut Registry,
        field: PlayField,
        events: &mut Vec<GameEvent>,
    ) -> Self {
        let config = config.validated();
        let trickle = Timer::new(config.trickle_interval, |_, progress: &mut WaveProgress| {
            if progress.remaining == 0 {
                return;
            }
            let release = progress.batch.min(progress.remaining);
            progress.remaining -= release;
            progress.due += release;
        });
        let mut director = Self {
            config,
            progress: WaveProgress::default(),
            trickle,
        };
        director.launch(registry, field, events);
        director
    }

    /// Advance one tick given the registry's live countable count.
    /// Returns true if a new wave was launched.
    pub fn update(
        &mut self,
        live_asteroids: u32,
        registry: &mut Registry,
        field: PlayField,
        rng: &mut ChaCha8Rng,
        events: &mut Vec<GameEvent>,
    ) -> bool {
        let launched = live_asteroids == 0 && self.progress.remaining == 0 && self.progress.due == 0;
        if launched {
            self.launch(registry, field, events);
        }

        self.trickle.tick(&mut self.progress);
        if self.progress.due > 0 {
            self.spawn_due(registry, field, rng);
        }
        launched
    }

    fn launch(&mut self, registry: &mut Registry, field: PlayField, events: &mut Vec<GameEvent>) {
        let wave = self.progress.wave + 1;
        let total = self.config.wave_total(wave);
        self.progress = WaveProgress {
            wave,
            total,
            remaining: total,
            spawned: 0,
            due: 0,
            batch: self.config.batch_size(total),
        };
        self.trickle.reset();

        let banner = TextDisplay::centered(format!("Wave {wave}"), field.at_fraction(0.5, 0.75))
            .expires_after(self.config.announce_ticks);
        registry.enqueue(banner);
        events.push(GameEvent::WaveLaunched { wave, total });
        info!(wave, total, "wave launched");
    }

    /// Place every released asteroid, cycling through the entry points
    /// from a random start.
    fn spawn_due(&mut self, registry: &mut Registry, field: PlayField, rng: &mut ChaCha8Rng) {
        let count = std::mem::take(&mut self.progress.due);
        let mut entry = rng.gen_range(0..ENTRY_POINTS.len());
        for _ in 0..count {
            let point = &ENTRY_POINTS[entry];
            let heading = rng.gen_range(point.heading_min..point.heading_max);
            let speed = WAVE_ASTEROID_MIN_SPEED + rng.gen::<f32>();
            let size = random_size(rng);
            registry.enqueue(Asteroid::new(point.position(field), heading, speed, size, rng));
            entry = (entry + 1) % ENTRY_POINTS.len();
        }
        self.progress.spawned += count;
        debug!(
            wave = self.progress.wave,
            count,
            remaining = self.progress.remaining,
            "asteroid batch spawned"
        );
    }

    pub fn view(&self) -> WaveView {
        WaveView {
            wave: self.progress.wave,
            total: self.progress.total,
            remaining: self.progress.remaining + self.progress.due,
            spawned: self.progress.spawned,
        }
    }

    pub fn wave(&self) -> u32 {
        self.progress.wave
    }

    pub fn total(&self) -> u32 {
        self.progress.total
    }

    /// Asteroids of the current wave not yet spawned.
    pub fn remaining(&self) -> u32 {
        self.progress.remaining + self.progress.due
    }
}
