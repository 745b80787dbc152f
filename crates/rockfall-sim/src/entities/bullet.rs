//! Projectiles fired by the ship.

use std::any::Any;

use glam::Vec2;

use rockfall_core::constants::{BULLET_DAMAGE, BULLET_SPEED, DEFAULT_EXTENT};
use rockfall_core::enums::{EntityKind, Team};

use super::{Body, Entity, TickContext};

/// A straight-flying shot. Dies on leaving the field or on its first hit.
#[derive(Debug)]
pub struct Bullet {
    body: Body,
}

impl Bullet {
    pub fn new(position: Vec2, direction: f32) -> Self {
        let mut body = Body::new(DEFAULT_EXTENT, DEFAULT_EXTENT)
            .at(position)
            .with_team(Team::Friend)
            .with_speed_max(BULLET_SPEED)
            .without_screen_wrap();
        body.set_direction(direction);
        body.set_speed(BULLET_SPEED);
        Self { body }
    }
}

impl Entity for Bullet {
    fn kind(&self) -> EntityKind {
        EntityKind::Bullet
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, ctx: &mut TickContext<'_>) {
        if self.body.is_off_screen(ctx.field) {
            self.body.kill();
        }
        self.body.advance();
    }

    fn collide_with(&mut self, other: &mut dyn Entity, ctx: &mut TickContext<'_>) {
        if !self.body.is_active() || other.kind() == EntityKind::Bullet {
            return;
        }
        if other.body().team() == Team::Enemy && self.overlaps(other) {
            self.body.kill();
            other.take_damage(EntityKind::Bullet, BULLET_DAMAGE, ctx);
        }
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
