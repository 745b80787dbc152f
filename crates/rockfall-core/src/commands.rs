//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and applied at the next tick boundary, before the
//! registry pass, so they never race an in-progress update.

use serde::{Deserialize, Serialize};

use crate::enums::TurnDirection;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start (or stop, with `TurnDirection::None`) spinning the ship.
    Turn { direction: TurnDirection },
    /// Add to the ship's speed. Negative values brake and then reverse.
    Accelerate { amount: f32 },
    /// Fire a bullet along the ship's heading.
    Fire,
    /// Enter or leave the pause menu. The ship ghosts while paused.
    TogglePause,
}
