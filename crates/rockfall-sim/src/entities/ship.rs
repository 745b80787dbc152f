//! The player's ship.

use std::any::Any;

use glam::Vec2;
use tracing::info;

use rockfall_core::constants::*;
use rockfall_core::enums::{EntityKind, EntityState, Team};
use rockfall_core::events::GameEvent;
use rockfall_core::types::Bounds;

use super::{Body, Bullet, Entity, StickParticle, TickContext};
use crate::timer::Timer;

/// The player's ship. An initiator: it scans for hazards every tick it is Active.
#[derive(Debug)]
pub struct Ship {
    body: Body,
    impervious: Timer<Body>,
}

impl Ship {
    pub fn new(position: Vec2) -> Self {
        let body = Body::new(SHIP_UNIT * 2.0, SHIP_UNIT * 3.0)
            .at(position)
            .with_z(SHIP_Z)
            .with_team(Team::Friend)
            .with_speed_max(SHIP_SPEED_MAX);

        let impervious = Timer::stopped(SHIP_IMPERVIOUS_TICKS, |timer, body: &mut Body| {
            timer.stop();
            timer.reset();
            body.set_state(EntityState::Active);
        });

        Self { body, impervious }
    }

    /// A bullet leaving the centre of the hull along the current heading,
    /// or `None` while the ship is not flying.
    pub fn fire(&self) -> Option<Bullet> {
        match self.body.state() {
            EntityState::Active | EntityState::Impervious => {
                Some(Bullet::new(self.bounds().center(), self.body.direction()))
            }
            _ => None,
        }
    }

    pub fn is_impervious(&self) -> bool {
        self.body.state() == EntityState::Impervious
    }

    pub fn is_ghost(&self) -> bool {
        self.body.state() == EntityState::Ghost
    }

    /// Flip between Impervious and Active. Entering Impervious starts the
    /// grace timer from zero; leaving it early stops and rewinds the timer.
    pub fn toggle_impervious(&mut self) {
        if self.is_impervious() {
            self.body.set_state(EntityState::Active);
            self.impervious.stop();
            self.impervious.reset();
        } else {
            self.body.set_state(EntityState::Impervious);
            self.impervious.reset();
            self.impervious.start();
        }
    }

    /// Enter or leave the pause ghost. Returns true if the ship is now a ghost.
    /// Refused while the ship is waiting to respawn.
    pub fn toggle_ghost(&mut self) -> bool {
        match self.body.state() {
            EntityState::Passive | EntityState::Killed => false,
            EntityState::Ghost => {
                self.body.set_state(EntityState::Active);
                false
            }
            EntityState::Active | EntityState::Impervious => {
                self.body.set_state(EntityState::Ghost);
                true
            }
        }
    }

    /// Put the ship back on the field, stationary and facing up, for an
    /// impervious grace period.
    pub fn respawn(&mut self, at: Vec2) {
        self.body.set_position(at);
        self.body.set_rotation(0.0);
        self.body.set_direction(0.0);
        self.body.set_speed(0.0);
        if !self.is_impervious() {
            self.toggle_impervious();
        }
    }

    pub fn impervious_timer(&self) -> &Timer<Body> {
        &self.impervious
    }

    fn explode(&mut self, ctx: &mut TickContext<'_>) {
        self.body.set_state(EntityState::Passive);
        let at = self.body.position();
        for _ in 0..SHIP_EXPLOSION_PARTICLES {
            let particle = StickParticle::new(at, ctx.rng);
            ctx.spawn(particle);
        }
        ctx.emit(GameEvent::ShipDestroyed);
        info!(x = at.x, y = at.y, "ship destroyed");
    }
}

impl Entity for Ship {
    fn kind(&self) -> EntityKind {
        EntityKind::Ship
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, ctx: &mut TickContext<'_>) {
        self.body.screen_wrap(ctx.field);

        // The hull always points where it is going.
        let heading = self.body.direction() + self.body.turn_rate();
        self.body.set_rotation(heading);
        self.body.set_direction(heading);
        self.body.advance();

        self.impervious.tick(&mut self.body);
    }

    fn collide_with(&mut self, other: &mut dyn Entity, ctx: &mut TickContext<'_>) {
        if !self.body.is_active() {
            return;
        }
        if other.kind().is_hazard() && self.overlaps(other) {
            self.explode(ctx);
        }
    }

    /// The nose of the triangle is empty space; trim the box to the hull.
    fn bounds(&self) -> Bounds {
        let p = self.body.position();
        Bounds::new(
            p.x,
            p.y,
            self.body.width(),
            self.body.height() * SHIP_HITBOX_HEIGHT_FACTOR,
        )
    }

    fn is_initiator(&self) -> bool {
        true
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
