//! Seeded random scale rolls for placed structures.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Rolls structure scales uniformly in `[min, max)`.
#[derive(Clone, Debug)]
pub struct ScaleRoller {
    rng: ChaCha8Rng,
    min: f32,
    max: f32,
}

impl ScaleRoller {
    pub fn new(seed: u64, min: f32, max: f32) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            min,
            max,
        }
    }

    /// Next scale. A degenerate range (`min >= max`) always yields `min`.
    pub fn roll(&mut self) -> f32 {
        if self.min >= self.max {
            return self.min;
        }
        self.rng.random_range(self.min..self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolls_stay_in_range() {
        let mut roller = ScaleRoller::new(3, 0.5, 0.8);
        for _ in 0..1_000 {
            let scale = roller.roll();
            assert!((0.5..0.8).contains(&scale), "{scale}");
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = ScaleRoller::new(42, 0.5, 0.8);
        let mut b = ScaleRoller::new(42, 0.5, 0.8);
        for _ in 0..16 {
            assert_eq!(a.roll(), b.roll());
        }
    }

    #[test]
    fn test_degenerate_range_returns_min() {
        let mut roller = ScaleRoller::new(0, 0.7, 0.7);
        assert_eq!(roller.roll(), 0.7);
        let mut inverted = ScaleRoller::new(0, 0.9, 0.1);
        assert_eq!(inverted.roll(), 0.9);
    }
}
