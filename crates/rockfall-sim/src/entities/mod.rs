//! Entity base: shared kinematic state, the `Entity` trait and the per-tick context.
//!
//! Every simulated object owns a [`Body`] (position, motion, extent, team,
//! lifecycle state) and implements [`Entity`] for the behaviors it actually
//! has. The defaults are inert: no collision reaction, no damage,
//! not an initiator, not counted toward wave completion.

pub mod asteroid;
pub mod bullet;
pub mod particle;
pub mod ship;
pub mod text;
pub mod ticker;

use std::any::Any;

use glam::Vec2;
use rand_chacha::ChaCha8Rng;

use rockfall_core::constants::{DEFAULT_EXTENT, DEFAULT_SPEED_MAX, DEFAULT_TURN_RATE_MAX, WRAP_MARGIN};
use rockfall_core::enums::{EntityKind, EntityState, Team, TurnDirection};
use rockfall_core::events::GameEvent;
use rockfall_core::types::{heading_vector, normalize_degrees, Bounds, PlayField};

use crate::registry::{EntityId, Spawner};

pub use asteroid::Asteroid;
pub use bullet::Bullet;
pub use particle::StickParticle;
pub use ship::Ship;
pub use text::TextDisplay;
pub use ticker::TickerText;

/// Kinematic and lifecycle state shared by every entity.
///
/// `direction` and `rotation` are kept in `[0, 360)`. Speed and spin are
/// clamped to their maxima on every write. Extent and draw rank are fixed
/// once the body is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    position: Vec2,
    direction: f32,
    rotation: f32,
    speed: f32,
    speed_max: f32,
    turn_rate: f32,
    turn_rate_max: f32,
    width: f32,
    height: f32,
    z: i32,
    team: Team,
    state: EntityState,
    screen_wrap: bool,
}

impl Default for Body {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENT, DEFAULT_EXTENT)
    }
}

impl Body {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            direction: 0.0,
            rotation: 0.0,
            speed: 0.0,
            speed_max: DEFAULT_SPEED_MAX,
            turn_rate: 0.0,
            turn_rate_max: DEFAULT_TURN_RATE_MAX,
            width,
            height,
            z: 0,
            team: Team::Neutral,
            state: EntityState::Active,
            screen_wrap: true,
        }
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }

    pub fn with_team(mut self, team: Team) -> Self {
        self.team = team;
        self
    }

    pub fn with_speed_max(mut self, speed_max: f32) -> Self {
        self.speed_max = speed_max.abs();
        self
    }

    pub fn with_turn_rate_max(mut self, turn_rate_max: f32) -> Self {
        self.turn_rate_max = turn_rate_max.abs();
        self
    }

    pub fn without_screen_wrap(mut self) -> Self {
        self.screen_wrap = false;
        self
    }

    // --- Position ---

    /// Top-left corner of the nominal extent.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    // --- Heading and facing ---

    pub fn direction(&self) -> f32 {
        self.direction
    }

    pub fn set_direction(&mut self, degrees: f32) {
        self.direction = normalize_degrees(degrees);
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = normalize_degrees(degrees);
    }

    /// Spin the facing by the current turn rate.
    pub fn spin(&mut self) {
        self.set_rotation(self.rotation + self.turn_rate);
    }

    // --- Speed ---

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn speed_max(&self) -> f32 {
        self.speed_max
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(-self.speed_max, self.speed_max);
    }

    /// Add to the speed, keeping its magnitude within the clamp.
    pub fn accelerate(&mut self, amount: f32) {
        self.set_speed(self.speed + amount);
    }

    /// Velocity for one tick along the direction of travel.
    pub fn velocity(&self) -> Vec2 {
        heading_vector(self.direction) * self.speed
    }

    /// Move one tick's worth along the direction of travel.
    pub fn advance(&mut self) {
        self.position += self.velocity();
    }

    // --- Spin ---

    pub fn turn_rate(&self) -> f32 {
        self.turn_rate
    }

    pub fn turn_rate_max(&self) -> f32 {
        self.turn_rate_max
    }

    pub fn set_turn_rate(&mut self, rate: f32, direction: TurnDirection) {
        self.turn_rate = (rate * direction.sign()).clamp(-self.turn_rate_max, self.turn_rate_max);
    }

    // --- Extent ---

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn z(&self) -> i32 {
        self.z
    }

    /// Nominal bounding box.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.position.x, self.position.y, self.width, self.height)
    }

    // --- Affiliation and lifecycle ---

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn state(&self) -> EntityState {
        self.state
    }

    /// Change lifecycle state. `Killed` is absorbing: once set, later writes are ignored.
    pub fn set_state(&mut self, state: EntityState) {
        if self.state.is_terminal() {
            return;
        }
        self.state = state;
    }

    pub fn kill(&mut self) {
        self.set_state(EntityState::Killed);
    }

    pub fn is_active(&self) -> bool {
        self.state == EntityState::Active
    }

    /// True if the position lies outside `[0, width] x [0, height]`.
    pub fn is_off_screen(&self, field: PlayField) -> bool {
        !field.contains(self.position)
    }

    /// Re-enter from the opposite edge once the body has drifted off the
    /// field while still heading off it.
    ///
    /// The cross-axis coordinate is mirrored (`dimension - coordinate`) on
    /// every wrap, so a rock leaving the top-left re-enters bottom-right.
    /// Only the left and top edges carry the drift margin.
    pub fn screen_wrap(&mut self, field: PlayField) {
        if !self.screen_wrap {
            return;
        }
        let (x, y) = (self.position.x, self.position.y);
        let heading = self.direction;

        if x < -WRAP_MARGIN && heading > 180.0 {
            self.position = Vec2::new(x + field.width, field.height - y);
        } else if x > field.width && heading <= 180.0 {
            self.position = Vec2::new(x - field.width, field.height - y);
        } else if y > field.height && (90.0..=270.0).contains(&heading) {
            self.position = Vec2::new(field.width - x, y - field.height);
        } else if y < -WRAP_MARGIN && (heading > 270.0 || heading < 90.0) {
            self.position = Vec2::new(field.width - x, y + field.height);
        }
    }
}

/// Everything an entity callback may touch besides itself.
///
/// Spawns go through `spawner`, which only reaches the registry's pending
/// queue: nothing created during a pass can join that same pass.
pub struct TickContext<'a> {
    pub field: PlayField,
    pub rng: &'a mut ChaCha8Rng,
    pub spawner: Spawner<'a>,
    pub events: &'a mut Vec<GameEvent>,
}

impl TickContext<'_> {
    pub fn spawn(&mut self, entity: impl Entity) -> EntityId {
        self.spawner.spawn(Box::new(entity))
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

/// A simulated object.
pub trait Entity: Any {
    fn kind(&self) -> EntityKind;

    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    /// Advance one tick. The base behavior only wraps around the field.
    fn update(&mut self, ctx: &mut TickContext<'_>) {
        let field = ctx.field;
        self.body_mut().screen_wrap(field);
    }

    /// React to `other`. Only called on initiators, and only with an Active
    /// `other` that is not `self`.
    fn collide_with(&mut self, _other: &mut dyn Entity, _ctx: &mut TickContext<'_>) {}

    fn take_damage(&mut self, _source: EntityKind, _amount: u32, _ctx: &mut TickContext<'_>) {}

    /// Collision box. Defaults to the nominal extent.
    fn bounds(&self) -> Bounds {
        self.body().bounds()
    }

    /// Whether this entity scans the live set for collisions.
    fn is_initiator(&self) -> bool {
        false
    }

    /// Whether this entity counts toward wave completion while Active.
    fn is_countable(&self) -> bool {
        false
    }

    fn text(&self) -> Option<&str> {
        None
    }

    /// Hidden entities keep running but are left out of snapshots.
    fn is_visible(&self) -> bool {
        true
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Collision boxes overlap and `other` can still be hit.
    fn overlaps(&self, other: &dyn Entity) -> bool {
        other.body().is_active() && self.bounds().intersects(&other.bounds())
    }
}
