//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- Play field ---

/// Default play field width.
pub const FIELD_WIDTH: f32 = 800.0;

/// Default play field height.
pub const FIELD_HEIGHT: f32 = 600.0;

/// How far past the left/top edge an entity drifts before it wraps.
pub const WRAP_MARGIN: f32 = 10.0;

// --- Registry ---

/// Ticks between reclamation passes that drop killed entities.
pub const RECLAIM_INTERVAL_TICKS: u32 = 150;

// --- Motion defaults ---

/// Default speed clamp for entities that don't set their own.
pub const DEFAULT_SPEED_MAX: f32 = 3.0;

/// Default spin clamp (degrees per tick).
pub const DEFAULT_TURN_RATE_MAX: f32 = 3.0;

/// Default bounding box extent.
pub const DEFAULT_EXTENT: f32 = 10.0;

// --- Ship ---

/// Size unit the ship's triangle is built from.
pub const SHIP_UNIT: f32 = 8.0;

/// Ship draws above everything else.
pub const SHIP_Z: i32 = 1000;

pub const SHIP_SPEED_MAX: f32 = 6.0;

/// Fraction of the ship's height covered by its collision box.
pub const SHIP_HITBOX_HEIGHT_FACTOR: f32 = 0.8;

/// Spin rate requested by a turn command (clamped by the turn rate max).
pub const SHIP_TURN_RATE: f32 = 3.5;

/// Ticks of post-respawn invulnerability.
pub const SHIP_IMPERVIOUS_TICKS: u32 = 150;

/// Ticks between the ship exploding and respawning.
pub const SHIP_RESPAWN_TICKS: u32 = 50;

/// Debris sticks thrown out when the ship explodes.
pub const SHIP_EXPLOSION_PARTICLES: usize = 7;

// --- Bullet ---

pub const BULLET_SPEED: f32 = 12.0;

/// Damage dealt by one bullet.
pub const BULLET_DAMAGE: u32 = 1;

// --- Asteroids ---

/// Bounding box extent per size rank.
pub const ASTEROID_EXTENT_PER_RANK: f32 = 10.0;

/// Speed clamp for all asteroids (fragments are the fastest).
pub const ASTEROID_SPEED_MAX: f32 = 4.0;

/// Default spin (degrees per tick).
pub const ASTEROID_SPIN: f32 = 1.0;

/// Asteroids off screen for longer than this are killed.
pub const ASTEROID_OFFSCREEN_LIMIT_TICKS: u32 = 300;

/// Upper bound (exclusive) of a tiny asteroid's random lifespan.
pub const ASTEROID_DEBRIS_LIFESPAN_MAX: u32 = 60;

/// Smaller asteroids spawned when a rock breaks apart.
pub const ASTEROID_FRAGMENTS: usize = 3;

pub const ASTEROID_FRAGMENT_SPEED: f32 = 3.3;

pub const ASTEROID_FRAGMENT_SPIN: f32 = 3.0;

/// Tiny debris pieces spawned when a rock breaks apart.
pub const ASTEROID_DEBRIS: usize = 6;

pub const ASTEROID_DEBRIS_SPEED: f32 = 2.3;

// --- Particles ---

/// Spin clamp for stick particles; they tumble much faster than rocks.
pub const PARTICLE_TURN_RATE_MAX: f32 = 15.0;

/// Upper bound (exclusive) of a particle's random lifespan.
pub const PARTICLE_LIFESPAN_MAX: u32 = 50;

/// Upper bound (exclusive) of a particle's random speed.
pub const PARTICLE_SPEED_MAX: f32 = 2.0;

// --- Waves ---

/// Asteroids in wave 1; wave N gets N times this.
pub const WAVE_BASE_COUNT: u32 = 7;

/// Hard cap on asteroids per wave.
pub const WAVE_MAX_ASTEROIDS: u32 = 100;

/// Ticks between trickle-spawn batches.
pub const WAVE_TRICKLE_INTERVAL_TICKS: u32 = 90;

/// A wave is trickled in over this many batches.
pub const WAVE_BATCHES: u32 = 5;

/// How long the "Wave N" banner stays up.
pub const WAVE_ANNOUNCE_TICKS: u32 = 50;

/// Base speed of a freshly spawned wave asteroid; up to +1.0 is added at random.
pub const WAVE_ASTEROID_MIN_SPEED: f32 = 1.5;

// --- Text ---

/// Estimated advance of one glyph, used to size text boxes.
pub const TEXT_CHAR_WIDTH: f32 = 14.0;

/// Line height of HUD text.
pub const TEXT_HEIGHT: f32 = 24.0;

/// Draw rank of HUD text; above the rocks, below the ship.
pub const TEXT_Z: i32 = 100;

// --- Pause menu ---

/// Ticks between characters typed by the pause ticker.
pub const TICKER_KEYPRESS_TICKS: u32 = 2;

/// Ticks a fully typed ticker message stays up before the next one starts.
pub const TICKER_ERASE_DELAY_TICKS: u32 = 40;
