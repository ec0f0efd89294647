//! Injectable randomness for bracket seeding.
//!
//! Seeding is a policy point: production shuffles uniformly, tests inject a
//! fixed permutation to pin exact bracket shapes, and a deterministic seeding
//! strategy is a one-line swap at the call site.

use crate::models::TeamRef;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Source of seeding order for formats that randomize (elimination, Swiss).
pub trait Shuffler {
    fn shuffle(&mut self, teams: &mut [TeamRef]);
}

/// Uniform random seeding from the thread-local generator. The default for
/// production callers.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngShuffler;

impl Shuffler for ThreadRngShuffler {
    fn shuffle(&mut self, teams: &mut [TeamRef]) {
        teams.shuffle(&mut rand::thread_rng());
    }
}

/// Reproducible uniform seeding from a fixed seed.
#[derive(Clone, Debug)]
pub struct SeededShuffler(StdRng);

impl SeededShuffler {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Shuffler for SeededShuffler {
    fn shuffle(&mut self, teams: &mut [TeamRef]) {
        teams.shuffle(&mut self.0);
    }
}

/// Identity: keeps the roster in the order supplied.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoShuffle;

impl Shuffler for NoShuffle {
    fn shuffle(&mut self, _teams: &mut [TeamRef]) {}
}
