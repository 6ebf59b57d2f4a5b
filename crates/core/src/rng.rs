//! RNG module - seedable randomness for shapes and fruit
//!
//! Shapes and fruit are both drawn uniformly and independently: every spawn picks
//! one of the seven shapes, and each of the four cells picks its own fruit.
//! A small LCG keeps whole games reproducible from a single seed.

use crate::types::{Fruit, ShapeKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Pick one element uniformly
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.next_range(items.len() as u32) as usize]
    }

    /// Draw a shape kind uniformly from all seven
    pub fn next_shape(&mut self) -> ShapeKind {
        self.pick(&ShapeKind::ALL)
    }

    /// Draw a (non-empty) fruit uniformly
    pub fn next_fruit(&mut self) -> Fruit {
        self.pick(&Fruit::ALL)
    }

    /// Draw four independent fruits, one per piece cell
    pub fn next_fruits(&mut self) -> [Fruit; 4] {
        [
            self.next_fruit(),
            self.next_fruit(),
            self.next_fruit(),
            self.next_fruit(),
        ]
    }

    /// Current RNG state (seeding a new RNG with it continues the same stream)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), rng.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(6) < 6);
        }
    }

    #[test]
    fn test_every_shape_and_fruit_is_reachable() {
        let mut rng = SimpleRng::new(99);
        let mut shapes = [false; 7];
        let mut fruits = [false; 6];
        for _ in 0..500 {
            let s = rng.next_shape();
            shapes[ShapeKind::ALL.iter().position(|k| *k == s).unwrap()] = true;
            let f = rng.next_fruit();
            fruits[Fruit::ALL.iter().position(|k| *k == f).unwrap()] = true;
        }
        assert!(shapes.iter().all(|seen| *seen), "missing shape: {:?}", shapes);
        assert!(fruits.iter().all(|seen| *seen), "missing fruit: {:?}", fruits);
    }

    #[test]
    fn test_state_continues_stream() {
        let mut rng = SimpleRng::new(42);
        rng.next_u32();
        let mut resumed = SimpleRng::new(rng.state());
        assert_eq!(rng.next_u32(), resumed.next_u32());
    }
}
