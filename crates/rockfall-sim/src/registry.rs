//! Entity registry: the live set, the pending queue and the per-tick pass.
//!
//! The live set is a `Vec` kept in ascending draw rank. Everything spawned
//! while a pass is running lands in the pending queue and only joins the
//! live set once the pass is over, so the set being iterated is never
//! resized under the iteration.

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use rockfall_core::constants::RECLAIM_INTERVAL_TICKS;
use rockfall_core::enums::EntityState;
use rockfall_core::events::GameEvent;
use rockfall_core::state::EntityView;
use rockfall_core::types::PlayField;

use crate::entities::{Entity, TickContext};
use crate::timer::Timer;

/// Stable handle to a registered entity. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(u64);

impl EntityId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

struct Slot {
    id: EntityId,
    entity: Box<dyn Entity>,
}

impl Slot {
    fn is_killed(&self) -> bool {
        self.entity.body().state().is_terminal()
    }

    fn is_drawn(&self) -> bool {
        self.entity.body().state().is_drawn() && self.entity.is_visible()
    }

    fn counts(&self) -> bool {
        self.entity.is_countable() && self.entity.body().is_active()
    }

    fn view(&self) -> EntityView {
        let body = self.entity.body();
        EntityView {
            id: self.id.raw(),
            kind: self.entity.kind(),
            state: body.state(),
            team: body.team(),
            position: body.position(),
            width: body.width(),
            height: body.height(),
            rotation: body.rotation(),
            direction: body.direction(),
            z: body.z(),
            bounds: self.entity.bounds(),
            text: self.entity.text().map(str::to_owned),
        }
    }
}

/// Write access to the pending queue, handed to entity callbacks.
pub struct Spawner<'a> {
    pending: &'a mut Vec<Slot>,
    next_id: &'a mut u64,
}

impl Spawner<'_> {
    pub fn spawn(&mut self, entity: Box<dyn Entity>) -> EntityId {
        let id = EntityId(*self.next_id);
        *self.next_id += 1;
        self.pending.push(Slot { id, entity });
        id
    }
}

pub struct Registry {
    live: Vec<Slot>,
    pending: Vec<Slot>,
    next_id: u64,
    /// Active countable entities seen by the last pass.
    countable: u32,
    reclaim_timer: Timer<Vec<Slot>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::with_reclaim_interval(RECLAIM_INTERVAL_TICKS)
    }

    pub fn with_reclaim_interval(ticks: u32) -> Self {
        let reclaim_timer = Timer::new(ticks, |_, live: &mut Vec<Slot>| {
            let before = live.len();
            live.retain(|slot| !slot.is_killed());
            let removed = before - live.len();
            if removed > 0 {
                debug!(removed, live = live.len(), "reclaimed killed entities");
            }
        });
        Self {
            live: Vec::new(),
            pending: Vec::new(),
            next_id: 1,
            countable: 0,
            reclaim_timer,
        }
    }

    /// Queue an entity. It joins the live set at the end of the next pass.
    pub fn enqueue(&mut self, entity: impl Entity) -> EntityId {
        self.spawner().spawn(Box::new(entity))
    }

    pub fn spawner(&mut self) -> Spawner<'_> {
        Spawner {
            pending: &mut self.pending,
            next_id: &mut self.next_id,
        }
    }

    /// Run one pass and return the number of Active countable entities.
    ///
    /// Order: reset the count, tick reclamation, update and collide the
    /// live set in draw order, then drain the pending queue and re-sort.
    pub fn update(
        &mut self,
        field: PlayField,
        rng: &mut ChaCha8Rng,
        events: &mut Vec<GameEvent>,
    ) -> u32 {
        self.countable = 0;
        self.reclaim_timer.tick(&mut self.live);

        let Self {
            live,
            pending,
            next_id,
            countable,
            ..
        } = self;

        {
            let mut ctx = TickContext {
                field,
                rng,
                spawner: Spawner {
                    pending: &mut *pending,
                    next_id: &mut *next_id,
                },
                events,
            };
            for i in 0..live.len() {
                match live[i].entity.body().state() {
                    EntityState::Active => {
                        if live[i].entity.is_countable() {
                            *countable += 1;
                        }
                        live[i].entity.update(&mut ctx);
                        if live[i].entity.is_initiator() && live[i].entity.body().is_active() {
                            dispatch_collisions(live, i, &mut ctx);
                        }
                    }
                    EntityState::Impervious => live[i].entity.update(&mut ctx),
                    EntityState::Passive | EntityState::Ghost | EntityState::Killed => {}
                }
            }
        }

        if !pending.is_empty() {
            *countable += pending.iter().filter(|slot| slot.counts()).count() as u32;
            live.append(pending);
            // Stable, so equal ranks keep their arrival order.
            live.sort_by_key(|slot| slot.entity.body().z());
        }

        *countable
    }

    /// Owned views of the live set in draw order. Only drawable states
    /// make it in: Passive and Killed entities are left out, and so are
    /// hidden ones.
    pub fn snapshot(&self) -> Vec<EntityView> {
        self.live
            .iter()
            .filter(|slot| slot.is_drawn())
            .map(Slot::view)
            .collect()
    }

    /// Looks in the live set first, then the pending queue.
    pub fn get(&self, id: EntityId) -> Option<&dyn Entity> {
        self.live
            .iter()
            .chain(self.pending.iter())
            .find(|slot| slot.id == id)
            .map(|slot| slot.entity.as_ref())
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut (dyn Entity + 'static)> {
        self.live
            .iter_mut()
            .chain(self.pending.iter_mut())
            .find(|slot| slot.id == id)
            .map(|slot| slot.entity.as_mut())
    }

    pub fn get_as<T: Entity>(&self, id: EntityId) -> Option<&T> {
        self.get(id)?.as_any().downcast_ref::<T>()
    }

    pub fn get_mut_as<T: Entity>(&mut self, id: EntityId) -> Option<&mut T> {
        self.get_mut(id)?.as_any_mut().downcast_mut::<T>()
    }

    /// Entities in the live set, Killed ones included until reclaimed.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty() && self.pending.is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Whether `id` is physically present in the live set.
    pub fn contains(&self, id: EntityId) -> bool {
        self.live.iter().any(|slot| slot.id == id)
    }

    /// Count reported by the last pass.
    pub fn countable(&self) -> u32 {
        self.countable
    }
}

/// Let the initiator at `index` react to every other Active entity.
/// Stops as soon as the initiator itself leaves the Active state.
fn dispatch_collisions(live: &mut [Slot], index: usize, ctx: &mut TickContext<'_>) {
    for other in 0..live.len() {
        if other == index {
            continue;
        }
        let (initiator, target) = pair_mut(live, index, other);
        if !initiator.body().is_active() {
            break;
        }
        if !target.body().is_active() {
            continue;
        }
        initiator.collide_with(target, ctx);
    }
}

fn pair_mut(
    slots: &mut [Slot],
    a: usize,
    b: usize,
) -> (&mut (dyn Entity + 'static), &mut (dyn Entity + 'static)) {
    debug_assert_ne!(a, b);
    if a < b {
        let (head, tail) = slots.split_at_mut(b);
        (head[a].entity.as_mut(), tail[0].entity.as_mut())
    } else {
        let (head, tail) = slots.split_at_mut(a);
        (tail[0].entity.as_mut(), head[b].entity.as_mut())
    }
}
