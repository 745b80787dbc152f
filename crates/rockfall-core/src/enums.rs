//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a simulated entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityState {
    /// Updated, collision-tested and drawn.
    #[default]
    Active,
    /// Updated and drawn, but excluded from the collision scan and immune to damage.
    Impervious,
    /// Neither updated nor collision-tested. Limbo before a respawn.
    Passive,
    /// Frozen while the pause menu is up.
    Ghost,
    /// Terminal. Waiting for the next reclamation pass.
    Killed,
}

impl EntityState {
    /// Whether this state can never be left.
    pub fn is_terminal(self) -> bool {
        self == EntityState::Killed
    }

    /// Whether a renderer should draw an entity in this state.
    pub fn is_drawn(self) -> bool {
        matches!(
            self,
            EntityState::Active | EntityState::Impervious | EntityState::Ghost
        )
    }
}

/// Team affiliation, used by projectiles to pick targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Friend,
    Enemy,
    #[default]
    Neutral,
}

/// Asteroid size class. Ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AsteroidSize {
    /// Explosion debris: no points, no collision box, short lifespan.
    Tiny,
    Small,
    Medium,
    Large,
}

impl AsteroidSize {
    /// All sizes, smallest first.
    pub const ALL: [AsteroidSize; 4] = [
        AsteroidSize::Tiny,
        AsteroidSize::Small,
        AsteroidSize::Medium,
        AsteroidSize::Large,
    ];

    /// Numeric rank (0 = tiny .. 3 = large).
    pub fn rank(self) -> u8 {
        match self {
            AsteroidSize::Tiny => 0,
            AsteroidSize::Small => 1,
            AsteroidSize::Medium => 2,
            AsteroidSize::Large => 3,
        }
    }

    /// Inverse of [`AsteroidSize::rank`]. Out-of-range ranks clamp to `Large`.
    pub fn from_rank(rank: u8) -> Self {
        match rank {
            0 => AsteroidSize::Tiny,
            1 => AsteroidSize::Small,
            2 => AsteroidSize::Medium,
            _ => AsteroidSize::Large,
        }
    }

    /// Score awarded for destroying an asteroid of this size.
    /// Smaller rocks are harder to hit and worth more.
    pub fn points(self) -> u32 {
        match self {
            AsteroidSize::Tiny => 0,
            AsteroidSize::Small => 3,
            AsteroidSize::Medium => 2,
            AsteroidSize::Large => 1,
        }
    }
}

/// What kind of thing an entity is. Used by collision rules and the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EntityKind {
    Ship,
    Bullet,
    Asteroid { size: AsteroidSize },
    Particle,
    Text,
}

impl EntityKind {
    /// Asteroids larger than debris are the only things that can destroy the ship.
    pub fn is_hazard(self) -> bool {
        matches!(self, EntityKind::Asteroid { size } if size > AsteroidSize::Tiny)
    }
}

/// Turn input. The sign is applied to the requested turn rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnDirection {
    Left,
    #[default]
    None,
    Right,
}

impl TurnDirection {
    pub fn sign(self) -> f32 {
        match self {
            TurnDirection::Left => -1.0,
            TurnDirection::None => 0.0,
            TurnDirection::Right => 1.0,
        }
    }
}
