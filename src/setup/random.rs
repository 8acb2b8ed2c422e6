//! # Random Source
//!
//! Every shuffle and dice roll in a session draws from one [`RandomSource`].
//! Draws happen in a fixed order, so two sources that yield the same words
//! produce the same game.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::fmt;

/// Generator owned by a session. Shuffles go through
/// [`rand::seq::SliceRandom`] on top of it.
pub trait RandomSource: RngCore + fmt::Debug {
    /// Number of raw values drawn so far.
    fn draws(&self) -> u64;
}

impl<'a> dyn RandomSource + 'a {
    /// Rolls a die with `sides` faces, returning 1..=sides.
    pub fn roll_die(&mut self, sides: u8) -> u8 {
        self.gen_range(1..=sides.max(1))
    }
}

/// [`RandomSource`] backed by a seeded [`StdRng`].
///
/// # Examples
///
/// ```
/// use cluedo::{RandomSource, SeededSource};
/// use rand::Rng;
///
/// let mut a = SeededSource::new(7);
/// let mut b = SeededSource::new(7);
/// assert_eq!(a.gen_range(0..100), b.gen_range(0..100));
/// assert!(a.draws() >= 1);
/// ```
pub struct SeededSource {
    seed: u64,
    rng: StdRng,
    draws: u64,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            draws: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl fmt::Debug for SeededSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededSource")
            .field("seed", &self.seed)
            .field("draws", &self.draws)
            .finish()
    }
}

impl RngCore for SeededSource {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws += 1;
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws += 1;
        self.rng.try_fill_bytes(dest)
    }
}

impl RandomSource for SeededSource {
    fn draws(&self) -> u64 {
        self.draws
    }
}
