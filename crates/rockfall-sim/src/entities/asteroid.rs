//! Asteroids: the wave enemies, and the debris they shed.

use std::any::Any;

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use rockfall_core::constants::*;
use rockfall_core::enums::{AsteroidSize, EntityKind, Team, TurnDirection};
use rockfall_core::events::GameEvent;

use super::{Body, Entity, TickContext};

/// A drifting, spinning rock. Breaks into smaller rocks when shot.
#[derive(Debug)]
pub struct Asteroid {
    body: Body,
    size: AsteroidSize,
    /// Ticks lived, only tracked for tiny debris.
    lifespan: u32,
    lifespan_max: u32,
    /// Ticks spent off screen, never reset.
    offscreen_ticks: u32,
}

/// A size for a freshly spawned wave rock (never debris).
pub fn random_size(rng: &mut ChaCha8Rng) -> AsteroidSize {
    AsteroidSize::from_rank(rng.gen_range(1..=3))
}

/// A heading in whole degrees, `1..=360`.
fn random_heading(rng: &mut ChaCha8Rng) -> f32 {
    rng.gen_range(1..=360) as f32
}

impl Asteroid {
    pub fn new(
        position: Vec2,
        direction: f32,
        speed: f32,
        size: AsteroidSize,
        rng: &mut ChaCha8Rng,
    ) -> Self {
        let extent = f32::from(size.rank()) * ASTEROID_EXTENT_PER_RANK;
        let mut body = Body::new(extent, extent)
            .at(position)
            .with_z(i32::from(size.rank()))
            .with_team(Team::Enemy)
            .with_speed_max(ASTEROID_SPEED_MAX);
        body.set_direction(direction);
        body.set_speed(speed);
        body.set_turn_rate(ASTEROID_SPIN, TurnDirection::Right);

        Self {
            body,
            size,
            lifespan: 0,
            lifespan_max: rng.gen_range(0..ASTEROID_DEBRIS_LIFESPAN_MAX),
            offscreen_ticks: 0,
        }
    }

    pub fn with_spin(mut self, rate: f32) -> Self {
        self.body.set_turn_rate(rate, TurnDirection::Right);
        self
    }

    pub fn size(&self) -> AsteroidSize {
        self.size
    }

    pub fn points(&self) -> u32 {
        self.size.points()
    }

    /// Smaller rocks plus a spray of debris, thrown out in random directions.
    fn shatter(&self, ctx: &mut TickContext<'_>) {
        let at = self.body.position();
        for _ in 0..ASTEROID_FRAGMENTS {
            let heading = random_heading(ctx.rng);
            let size = AsteroidSize::from_rank(ctx.rng.gen_range(0..self.size.rank()));
            let fragment = Asteroid::new(at, heading, ASTEROID_FRAGMENT_SPEED, size, ctx.rng)
                .with_spin(ASTEROID_FRAGMENT_SPIN);
            ctx.spawn(fragment);
        }
        for _ in 0..ASTEROID_DEBRIS {
            let heading = random_heading(ctx.rng);
            let debris = Asteroid::new(
                at,
                heading,
                ASTEROID_DEBRIS_SPEED,
                AsteroidSize::Tiny,
                ctx.rng,
            );
            ctx.spawn(debris);
        }
    }
}

impl Entity for Asteroid {
    fn kind(&self) -> EntityKind {
        EntityKind::Asteroid { size: self.size }
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, ctx: &mut TickContext<'_>) {
        self.body.screen_wrap(ctx.field);
        self.body.spin();
        self.body.advance();

        if self.size == AsteroidSize::Tiny {
            if self.lifespan > self.lifespan_max {
                self.body.kill();
            }
            self.lifespan += 1;
        }

        if self.body.is_off_screen(ctx.field) {
            if self.offscreen_ticks > ASTEROID_OFFSCREEN_LIMIT_TICKS {
                self.body.kill();
            }
            self.offscreen_ticks += 1;
        }
    }

    fn take_damage(&mut self, _source: EntityKind, _amount: u32, ctx: &mut TickContext<'_>) {
        if !self.body.is_active() {
            return;
        }
        self.body.kill();
        ctx.emit(GameEvent::AsteroidDestroyed { size: self.size });
        ctx.emit(GameEvent::PointsAwarded {
            points: self.points(),
        });
        if self.size > AsteroidSize::Tiny {
            self.shatter(ctx);
        }
    }

    fn is_countable(&self) -> bool {
        true
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
