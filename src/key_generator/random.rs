use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator that will generate `num` keys drawn uniformly from `0..bound`.
/// Keys may repeat. The same seed always produces the same keys
pub struct RandomKeys {
    remaining: usize,
    bound: i64,
    rng: Pcg64,
}

impl RandomKeys {
    pub fn new(num: usize, bound: i64, seed: u64) -> RandomKeys {
        assert!(bound > 0, "Invalid bound {}: must be positive", bound);
        RandomKeys {
            remaining: num,
            bound,
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl Iterator for RandomKeys {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.rng.gen_range(0..self.bound))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for RandomKeys {}

impl ExactSizeIterator for RandomKeys {}
