//! Explosion debris thrown out when the ship is destroyed.

use std::any::Any;

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use rockfall_core::constants::{PARTICLE_LIFESPAN_MAX, PARTICLE_SPEED_MAX, PARTICLE_TURN_RATE_MAX};
use rockfall_core::enums::{EntityKind, TurnDirection};

use super::{Body, Entity, TickContext};

/// A tumbling stick. Purely cosmetic: never collides, expires on its own.
#[derive(Debug)]
pub struct StickParticle {
    body: Body,
    lifespan: u32,
    lifespan_max: u32,
}

impl StickParticle {
    pub fn new(position: Vec2, rng: &mut ChaCha8Rng) -> Self {
        let mut body = Body::default()
            .at(position)
            .with_turn_rate_max(PARTICLE_TURN_RATE_MAX);

        let spin = rng.gen_range(0.0..PARTICLE_TURN_RATE_MAX);
        let turn = if rng.gen_bool(0.5) {
            TurnDirection::Right
        } else {
            TurnDirection::Left
        };
        body.set_turn_rate(spin, turn);
        body.set_direction(rng.gen_range(1..=360) as f32);
        body.set_speed(rng.gen_range(0.0..PARTICLE_SPEED_MAX));

        Self {
            body,
            lifespan: 0,
            lifespan_max: rng.gen_range(0..PARTICLE_LIFESPAN_MAX),
        }
    }
}

impl Entity for StickParticle {
    fn kind(&self) -> EntityKind {
        EntityKind::Particle
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, ctx: &mut TickContext<'_>) {
        if self.lifespan > self.lifespan_max {
            self.body.kill();
        }
        self.body.screen_wrap(ctx.field);
        self.body.spin();
        self.body.advance();
        self.lifespan += 1;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
