use std::fmt;

use glam::Vec2;

use crate::actor::{Actor, Skin};
use crate::config::SpawnRules;
use crate::error::StationError;
use crate::footprint::Footprint;
use crate::random::RandomSource;

pub const ROSTER_CAPACITY: usize = 8;

/// Position in the roster, and the identity of whoever occupies it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotIndex(usize);

impl SlotIndex {
    pub const FIRST: SlotIndex = SlotIndex(0);
    pub const LAST: SlotIndex = SlotIndex(ROSTER_CAPACITY - 1);

    pub fn new(index: usize) -> Option<Self> {
        (index < ROSTER_CAPACITY).then_some(Self(index))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Every slot, ascending.
    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (0..ROSTER_CAPACITY).map(SlotIndex)
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(Actor),
}

impl Slot {
    pub fn actor(&self) -> Option<&Actor> {
        match self {
            Slot::Occupied(actor) => Some(actor),
            Slot::Empty => None,
        }
    }

    pub fn actor_mut(&mut self) -> Option<&mut Actor> {
        match self {
            Slot::Occupied(actor) => Some(actor),
            Slot::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }
}

/// Fixed set of eight slots. Actors are never removed; death is a flag on
/// the actor.
#[derive(Clone, Debug, PartialEq)]
pub struct Roster {
    slots: [Slot; ROSTER_CAPACITY],
    impostor_slot: SlotIndex,
}

impl Roster {
    /// Fresh roster with one crewmate in slot 0 and a secret impostor slot.
    ///
    /// Draws the first crewmate's skin, then the impostor slot. A source
    /// that picks slot 0 is rejected with [`StationError::ImpostorSlot`].
    pub fn initialize<S: RandomSource + ?Sized>(source: &mut S, default_position: Vec2) -> Result<Self, StationError> {
        let skin = source.skin();
        let impostor_slot = source.impostor_slot();
        let roster = Self::with_impostor_slot(impostor_slot, skin, default_position)?;
        log::info!("impostor index = {impostor_slot}");
        Ok(roster)
    }

    /// Like [`Roster::initialize`] with the impostor slot picked by the caller.
    pub fn with_impostor_slot(impostor_slot: SlotIndex, skin: Skin, default_position: Vec2) -> Result<Self, StationError> {
        if impostor_slot == SlotIndex::FIRST {
            return Err(StationError::ImpostorSlot(impostor_slot.get()));
        }
        Ok(Self::build(impostor_slot, skin, default_position))
    }

    fn build(impostor_slot: SlotIndex, skin: Skin, default_position: Vec2) -> Self {
        let mut slots: [Slot; ROSTER_CAPACITY] = Default::default();
        slots[0] = Slot::Occupied(Actor::new(skin, default_position, false));
        Self { slots, impostor_slot }
    }

    pub fn impostor_slot(&self) -> SlotIndex {
        self.impostor_slot
    }

    /// The impostor, once someone has been spawned into its slot.
    pub fn impostor(&self) -> Option<&Actor> {
        self.get(self.impostor_slot)
    }

    pub fn get(&self, slot: SlotIndex) -> Option<&Actor> {
        self.slots[slot.0].actor()
    }

    pub fn get_mut(&mut self, slot: SlotIndex) -> Option<&mut Actor> {
        self.slots[slot.0].actor_mut()
    }

    /// Occupied slots in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, &Actor)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.actor().map(|actor| (SlotIndex(i), actor)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SlotIndex, &mut Actor)> + '_ {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.actor_mut().map(|actor| (SlotIndex(i), actor)))
    }

    pub fn occupied(&self) -> usize {
        self.iter().count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_empty())
    }

    pub fn alive_count(&self) -> usize {
        self.iter().filter(|(_, actor)| actor.is_alive()).count()
    }

    /// Spawns one actor at a random spot if `trigger` is the spawn key.
    ///
    /// The position and skin are drawn whenever the key matches, even if
    /// the roster turns out to be full.
    pub fn spawn_on_trigger<S: RandomSource + ?Sized>(
        &mut self,
        trigger: char,
        rules: &SpawnRules,
        source: &mut S,
    ) -> Option<SlotIndex> {
        if trigger != rules.key {
            return None;
        }
        let position = source.spawn_position(rules.area);
        let skin = source.skin();
        self.spawn_at(position, skin)
    }

    /// Fills the first empty slot. The actor is the impostor iff that slot is
    /// the impostor slot.
    pub fn spawn_at(&mut self, position: Vec2, skin: Skin) -> Option<SlotIndex> {
        let free = self.slots.iter().position(Slot::is_empty)?;
        let slot = SlotIndex(free);
        let impostor = slot == self.impostor_slot;
        self.slots[free] = Slot::Occupied(Actor::new(skin, position, impostor));
        log::debug!("spawned slot {slot} at ({}, {})", position.x, position.y);
        Some(slot)
    }

    /// Starts dragging every actor whose footprint strictly contains
    /// `point`. Returns how many were picked up.
    pub fn begin_drag(&mut self, point: Vec2, footprint: &Footprint) -> usize {
        let mut picked = 0;
        for (slot, actor) in self.iter_mut() {
            if footprint.bounds(actor.position()).contains_strict(point) {
                actor.start_dragging();
                log::debug!("dragging slot {slot}");
                picked += 1;
            }
        }
        picked
    }

    pub fn end_drag_all(&mut self) {
        for (_, actor) in self.iter_mut() {
            actor.stop_dragging();
        }
    }

    /// Moves every dragged actor to `pointer`. Returns how many moved.
    pub fn follow_pointer(&mut self, pointer: Vec2) -> usize {
        let mut moved = 0;
        for (_, actor) in self.iter_mut() {
            if actor.follow(pointer) {
                moved += 1;
            }
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpawnArea;

    /// Same answer every draw; counts how many draws were made.
    struct Fixed {
        skin: Skin,
        impostor: SlotIndex,
        position: Vec2,
        draws: usize,
    }

    impl Fixed {
        fn new(impostor: usize, position: Vec2) -> Self {
            Self {
                skin: Skin::Two,
                impostor: SlotIndex::new(impostor).unwrap(),
                position,
                draws: 0,
            }
        }
    }

    impl RandomSource for Fixed {
        fn skin(&mut self) -> Skin {
            self.draws += 1;
            self.skin
        }

        fn impostor_slot(&mut self) -> SlotIndex {
            self.draws += 1;
            self.impostor
        }

        fn spawn_position(&mut self, _area: SpawnArea) -> Vec2 {
            self.draws += 1;
            self.position
        }
    }

    fn rules() -> SpawnRules {
        SpawnRules::default()
    }

    #[test]
    fn initialize_fills_only_slot_zero() {
        let mut source = Fixed::new(4, Vec2::ZERO);
        let roster = Roster::initialize(&mut source, Vec2::new(600.0, 500.0)).unwrap();

        assert_eq!(source.draws, 2);
        assert_eq!(roster.impostor_slot(), SlotIndex::new(4).unwrap());
        assert_eq!(roster.occupied(), 1);
        let first = roster.get(SlotIndex::FIRST).unwrap();
        assert!(!first.is_impostor());
        assert_eq!(first.skin(), Skin::Two);
        assert_eq!(first.position(), Vec2::new(600.0, 500.0));
        assert!(roster.impostor().is_none());
    }

    #[test]
    fn source_picking_slot_zero_is_rejected() {
        let mut source = Fixed::new(0, Vec2::new(100.0, 100.0));
        let err = Roster::initialize(&mut source, Vec2::new(100.0, 100.0)).unwrap_err();
        assert!(matches!(err, StationError::ImpostorSlot(0)));
    }

    #[test]
    fn slot_zero_cannot_be_forced_as_impostor() {
        let err = Roster::with_impostor_slot(SlotIndex::FIRST, Skin::One, Vec2::ZERO).unwrap_err();
        assert!(matches!(err, StationError::ImpostorSlot(0)));
    }

    #[test]
    fn spawn_fills_first_empty_slot_and_marks_impostor() {
        let mut source = Fixed::new(2, Vec2::new(10.0, 20.0));
        let mut roster = Roster::initialize(&mut source, Vec2::ZERO).unwrap();

        let a = roster.spawn_on_trigger('a', &rules(), &mut source).unwrap();
        let b = roster.spawn_on_trigger('a', &rules(), &mut source).unwrap();

        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 2);
        assert!(!roster.get(a).unwrap().is_impostor());
        assert!(roster.get(b).unwrap().is_impostor());
        assert_eq!(roster.get(b).unwrap().position(), Vec2::new(10.0, 20.0));
        assert_eq!(roster.impostor(), roster.get(b));
    }

    #[test]
    fn other_keys_do_nothing_and_draw_nothing() {
        let mut source = Fixed::new(1, Vec2::ZERO);
        let mut roster = Roster::initialize(&mut source, Vec2::ZERO).unwrap();
        let before = source.draws;

        assert_eq!(roster.spawn_on_trigger('b', &rules(), &mut source), None);
        assert_eq!(roster.spawn_on_trigger('A', &rules(), &mut source), None);
        assert_eq!(source.draws, before);
        assert_eq!(roster.occupied(), 1);
    }

    #[test]
    fn full_roster_ignores_trigger_but_still_draws() {
        let mut source = Fixed::new(5, Vec2::ZERO);
        let mut roster = Roster::initialize(&mut source, Vec2::ZERO).unwrap();
        for _ in 1..ROSTER_CAPACITY {
            assert!(roster.spawn_on_trigger('a', &rules(), &mut source).is_some());
        }
        assert!(roster.is_full());

        let before = source.draws;
        assert_eq!(roster.spawn_on_trigger('a', &rules(), &mut source), None);
        assert_eq!(source.draws, before + 2);
        assert_eq!(roster.occupied(), ROSTER_CAPACITY);
    }

    #[test]
    fn begin_drag_picks_every_actor_under_the_point() {
        let footprint = Footprint::new(40, 60);
        let mut roster = Roster::with_impostor_slot(SlotIndex::LAST, Skin::One, Vec2::new(100.0, 100.0)).unwrap();
        let stacked = roster.spawn_at(Vec2::new(110.0, 100.0), Skin::Two).unwrap();
        let away = roster.spawn_at(Vec2::new(500.0, 500.0), Skin::Three).unwrap();

        assert_eq!(roster.begin_drag(Vec2::new(105.0, 100.0), &footprint), 2);
        assert!(roster.get(SlotIndex::FIRST).unwrap().is_dragging());
        assert!(roster.get(stacked).unwrap().is_dragging());
        assert!(!roster.get(away).unwrap().is_dragging());

        assert_eq!(roster.begin_drag(Vec2::new(900.0, 900.0), &footprint), 0);
    }

    #[test]
    fn follow_pointer_moves_only_dragged_actors() {
        let footprint = Footprint::new(40, 60);
        let mut roster = Roster::with_impostor_slot(SlotIndex::LAST, Skin::One, Vec2::new(100.0, 100.0)).unwrap();
        let idle = roster.spawn_at(Vec2::new(500.0, 500.0), Skin::Two).unwrap();

        roster.begin_drag(Vec2::new(100.0, 100.0), &footprint);
        assert_eq!(roster.follow_pointer(Vec2::new(250.0, 260.0)), 1);
        assert_eq!(roster.get(SlotIndex::FIRST).unwrap().position(), Vec2::new(250.0, 260.0));
        assert_eq!(roster.get(idle).unwrap().position(), Vec2::new(500.0, 500.0));

        roster.end_drag_all();
        assert_eq!(roster.follow_pointer(Vec2::ZERO), 0);
        assert!(roster.iter().all(|(_, actor)| !actor.is_dragging()));
    }

    #[test]
    fn slot_index_bounds() {
        assert_eq!(SlotIndex::new(7), Some(SlotIndex::LAST));
        assert_eq!(SlotIndex::new(8), None);
        assert_eq!(SlotIndex::all().count(), ROSTER_CAPACITY);
        assert_eq!(SlotIndex::LAST.to_string(), "7");
    }
}
