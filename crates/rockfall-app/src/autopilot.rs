//! Stand-in for a human player: aims at the nearest rock and fires on a cadence.

use glam::Vec2;

use rockfall_core::commands::PlayerCommand;
use rockfall_core::enums::{EntityKind, EntityState, TurnDirection};
use rockfall_core::state::{EntityView, GameStateSnapshot};
use rockfall_core::types::normalize_degrees;

/// Heading error (degrees) within which the autopilot stops turning.
const AIM_TOLERANCE: f32 = 5.0;

#[derive(Debug)]
pub struct Autopilot {
    fire_every: u64,
    last_tick: Option<u64>,
    last_shot: u64,
    turning: TurnDirection,
}

impl Autopilot {
    pub fn new(fire_every: u64) -> Self {
        Self {
            fire_every: fire_every.max(1),
            last_tick: None,
            last_shot: 0,
            turning: TurnDirection::None,
        }
    }

    /// Commands for the given snapshot. Each tick is acted on at most once.
    pub fn commands(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        let tick = snapshot.time.tick;
        if self.last_tick == Some(tick) {
            return Vec::new();
        }
        self.last_tick = Some(tick);

        let Some(ship) = snapshot.entities.iter().find(|e| e.kind == EntityKind::Ship) else {
            return Vec::new();
        };
        if !matches!(ship.state, EntityState::Active | EntityState::Impervious) {
            return Vec::new();
        }

        let mut commands = Vec::new();
        let turn = nearest_hazard(ship, &snapshot.entities)
            .map(|target| steer(ship, target))
            .unwrap_or(TurnDirection::None);
        if turn != self.turning {
            self.turning = turn;
            commands.push(PlayerCommand::Turn { direction: turn });
        }
        if tick >= self.last_shot + self.fire_every {
            self.last_shot = tick;
            commands.push(PlayerCommand::Fire);
        }
        commands
    }
}

fn nearest_hazard<'a>(ship: &EntityView, entities: &'a [EntityView]) -> Option<&'a EntityView> {
    let origin = ship.bounds.center();
    entities
        .iter()
        .filter(|e| e.kind.is_hazard() && e.state == EntityState::Active)
        .min_by(|a, b| {
            let da = a.bounds.center().distance_squared(origin);
            let db = b.bounds.center().distance_squared(origin);
            da.total_cmp(&db)
        })
}

/// Heading (0 = up, clockwise) from `from` to `to`.
fn bearing(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    normalize_degrees(delta.y.atan2(delta.x).to_degrees() + 90.0)
}

fn steer(ship: &EntityView, target: &EntityView) -> TurnDirection {
    let wanted = bearing(ship.bounds.center(), target.bounds.center());
    let error = normalize_degrees(wanted - ship.direction);
    if error <= AIM_TOLERANCE || error >= 360.0 - AIM_TOLERANCE {
        TurnDirection::None
    } else if error < 180.0 {
        TurnDirection::Right
    } else {
        TurnDirection::Left
    }
}
