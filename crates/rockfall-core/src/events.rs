//! Events emitted by the simulation for audio, HUD and score feedback.

use serde::{Deserialize, Serialize};

use crate::enums::AsteroidSize;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The ship fired a bullet.
    ShotFired,
    /// An asteroid was destroyed by damage.
    AsteroidDestroyed { size: AsteroidSize },
    /// Score to add to the running total.
    PointsAwarded { points: u32 },
    /// The ship hit a hazard and is waiting to respawn.
    ShipDestroyed,
    /// The ship is back on the field, impervious for a grace period.
    ShipRespawned,
    /// A new wave has started.
    WaveLaunched { wave: u32, total: u32 },
}
