//! Source of decorative, non-semantic variation ("hot" badges, filler
//! ratings). Draws are a CRC32 of (seed, component id, slot), so a fixed seed
//! gives identical output on every render.

use chrono::Utc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecorSource {
    seed: u64,
}

impl DecorSource {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from the wall clock; output differs between renders
    pub fn from_clock() -> Self {
        let now = Utc::now();
        Self::new(now.timestamp() as u64 ^ u64::from(now.timestamp_subsec_nanos()))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn roll(&self, key: &str, slot: usize) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&self.seed.to_le_bytes());
        hasher.update(key.as_bytes());
        hasher.update(&(slot as u64).to_le_bytes());
        hasher.finalize()
    }

    /// True for roughly `percent` percent of (key, slot) pairs
    pub fn chance(&self, key: &str, slot: usize, percent: u32) -> bool {
        self.roll(key, slot) % 100 < percent
    }

    /// Rating between 3.5 and 5.0 in steps of 0.1
    pub fn rating(&self, key: &str, slot: usize) -> f64 {
        3.5 + f64::from(self.roll(key, slot) % 16) / 10.0
    }

    pub fn review_count(&self, key: &str, slot: usize) -> u32 {
        5 + self.roll(key, slot) % 240
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_draws() {
        let a = DecorSource::new(7);
        let b = DecorSource::new(7);
        for slot in 0..20 {
            assert_eq!(a.chance("products-1", slot, 30), b.chance("products-1", slot, 30));
            assert_eq!(a.rating("products-1", slot), b.rating("products-1", slot));
        }
    }

    #[test]
    fn test_rating_bounds() {
        let decor = DecorSource::new(42);
        for slot in 0..100 {
            let r = decor.rating("k", slot);
            assert!((3.5..=5.0).contains(&r));
        }
    }

    #[test]
    fn test_chance_extremes() {
        let decor = DecorSource::new(1);
        assert!(!decor.chance("k", 0, 0));
        assert!(decor.chance("k", 0, 100));
    }
}
