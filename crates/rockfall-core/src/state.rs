//! Game state snapshot: the complete visible state handed to a renderer each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, EntityState, Team};
use crate::events::GameEvent;
use crate::types::{Bounds, SimTime};

/// Complete game state produced after each tick. An owned copy, so a
/// renderer can hold it while the simulation keeps mutating its own state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    /// The pause menu is up (the ship is a ghost).
    pub paused: bool,
    /// Live entities in ascending draw rank. Killed entities are never included.
    pub entities: Vec<EntityView>,
    pub wave: WaveView,
    pub score: ScoreView,
    /// Events emitted during this tick.
    pub events: Vec<GameEvent>,
}

/// Read-only view of one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u64,
    pub kind: EntityKind,
    pub state: EntityState,
    pub team: Team,
    /// Top-left corner of the nominal extent.
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    /// Facing, degrees in `[0, 360)`.
    pub rotation: f32,
    /// Direction of travel, degrees in `[0, 360)`.
    pub direction: f32,
    pub z: i32,
    /// Collision box, which may be smaller than the nominal extent.
    pub bounds: Bounds,
    /// Text content for HUD entities.
    pub text: Option<String>,
}

/// Wave progress for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveView {
    pub wave: u32,
    /// Asteroids in this wave.
    pub total: u32,
    /// Asteroids still to be trickled in.
    pub remaining: u32,
    /// Asteroids of this wave already spawned.
    pub spawned: u32,
}

/// Running score for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub points: u32,
    pub asteroids_destroyed: u32,
    pub ships_lost: u32,
    pub shots_fired: u32,
}
