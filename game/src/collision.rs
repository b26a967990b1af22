//! Impostor collisions.
//!
//! [`CollisionEngine::overlap`] is not a textbook AABB test. It
//! checks four corner cases with a mix of inclusive and strict comparisons,
//! which makes it asymmetric: `overlap(a, b)` and `overlap(b, a)` can
//! disagree. The elimination pass asks both ways round.

use glam::Vec2;

use crate::actor::Actor;
use crate::footprint::Footprint;
use crate::roster::{Roster, SlotIndex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionEngine {
    footprint: Footprint,
}

impl CollisionEngine {
    pub fn new(footprint: Footprint) -> Self {
        Self { footprint }
    }

    pub fn footprint(&self) -> &Footprint {
        &self.footprint
    }

    pub fn overlap(&self, a: &Actor, b: &Actor) -> bool {
        self.overlap_at(a.position(), b.position())
    }

    /// [`Self::overlap`] for two footprints centred on `a` and `b`.
    pub fn overlap_at(&self, a: Vec2, b: Vec2) -> bool {
        let a = self.footprint.bounds(a);
        let b = self.footprint.bounds(b);

        let right_in = a.right >= b.left && a.right <= b.right;
        let bottom_in = a.bottom >= b.top && a.bottom <= b.bottom;
        // inverted ranges, kept as they are
        let left_in = a.left >= b.right && a.left <= b.left;
        let top_in = a.top >= b.bottom && a.top <= b.top;

        if right_in && bottom_in {
            return true;
        }
        if left_in && bottom_in {
            return true;
        }
        if right_in && top_in {
            return true;
        }
        // the only strict horizontal test
        a.left > b.right && a.left < b.left && top_in
    }

    pub fn is_pointer_over(&self, actor: &Actor, point: Vec2) -> bool {
        self.footprint.bounds(actor.position()).contains_strict(point)
    }

    /// Unalives everyone touching the impostor. Returns how many died this
    /// tick; actors that were already dead are not counted again.
    ///
    /// The impostor's own slot is skipped, so it never collides with itself.
    pub fn frame_tick(&self, roster: &mut Roster) -> usize {
        let impostor_slot = roster.impostor_slot();
        let Some(impostor_at) = roster.get(impostor_slot).map(Actor::position) else {
            return 0;
        };

        let mut eliminated = 0;
        for slot in SlotIndex::all() {
            if slot == impostor_slot {
                continue;
            }
            let Some(actor) = roster.get_mut(slot) else {
                continue;
            };
            let at = actor.position();
            if self.overlap_at(at, impostor_at) || self.overlap_at(impostor_at, at) {
                if actor.is_alive() {
                    log::info!("slot {slot} unalived at ({}, {})", at.x, at.y);
                    eliminated += 1;
                }
                actor.unalive();
            }
        }
        eliminated
    }
}
