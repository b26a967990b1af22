use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::actor::Skin;
use crate::config::SpawnArea;
use crate::roster::{SlotIndex, ROSTER_CAPACITY};

/// The three random draws a session makes.
///
/// At startup: [`skin`](Self::skin) for the first crewmate, then
/// [`impostor_slot`](Self::impostor_slot). On each spawn:
/// [`spawn_position`](Self::spawn_position), then [`skin`](Self::skin).
pub trait RandomSource {
    fn skin(&mut self) -> Skin;

    /// Uniform over slots 1 to 7; slot 0 is never the impostor.
    fn impostor_slot(&mut self) -> SlotIndex;

    /// Whole-pixel point with `0 <= x <= max_x`, `0 <= y <= max_y`. x is
    /// drawn before y.
    fn spawn_position(&mut self, area: SpawnArea) -> Vec2;
}

/// [`RandomSource`] backed by a seeded ChaCha8 stream.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uses `seed` if given, otherwise picks a fresh one.
    pub fn from_config(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
        log::info!("random seed = {seed}");
        Self::new(seed)
    }
}

impl RandomSource for SeededSource {
    fn skin(&mut self) -> Skin {
        match self.rng.gen_range(1..=3u8) {
            1 => Skin::One,
            2 => Skin::Two,
            _ => Skin::Three,
        }
    }

    fn impostor_slot(&mut self) -> SlotIndex {
        let index = self.rng.gen_range(1..ROSTER_CAPACITY);
        SlotIndex::new(index).unwrap_or(SlotIndex::LAST)
    }

    fn spawn_position(&mut self, area: SpawnArea) -> Vec2 {
        let x = self.rng.gen_range(0..=area.max_x);
        let y = self.rng.gen_range(0..=area.max_y);
        Vec2::new(x as f32, y as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_draws() {
        let mut a = SeededSource::new(7);
        let mut b = SeededSource::new(7);
        let area = SpawnArea::default();
        for _ in 0..32 {
            assert_eq!(a.skin(), b.skin());
            assert_eq!(a.impostor_slot(), b.impostor_slot());
            assert_eq!(a.spawn_position(area), b.spawn_position(area));
        }
    }

    #[test]
    fn draws_stay_in_range() {
        let mut source = SeededSource::new(1234);
        let area = SpawnArea { max_x: 1200, max_y: 800 };
        let mut skins_seen = [false; 3];
        let mut slots_seen = [false; ROSTER_CAPACITY];
        for _ in 0..2000 {
            skins_seen[source.skin().index()] = true;

            let slot = source.impostor_slot();
            assert_ne!(slot, SlotIndex::FIRST);
            slots_seen[slot.get()] = true;

            let p = source.spawn_position(area);
            assert!((0.0..=1200.0).contains(&p.x));
            assert!((0.0..=800.0).contains(&p.y));
            assert_eq!(p.x.fract(), 0.0);
            assert_eq!(p.y.fract(), 0.0);
        }
        assert!(skins_seen.iter().all(|&seen| seen));
        assert_eq!(slots_seen, [false, true, true, true, true, true, true, true]);
    }

    #[test]
    fn zero_area_spawns_at_origin() {
        let mut source = SeededSource::new(0);
        let area = SpawnArea { max_x: 0, max_y: 0 };
        assert_eq!(source.spawn_position(area), Vec2::ZERO);
    }
}
