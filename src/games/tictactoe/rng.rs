//! Injectable randomness for random move selection.
//!
//! The engine never owns a generator. Callers hand it a [`RandomSource`],
//! either a seeded [`GameRng`] or a closure yielding scripted indices.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Produces uniform indices for choosing among legal moves.
pub trait RandomSource {
    /// Returns an index uniformly distributed in `[0, len)`.
    ///
    /// `len` is always at least 1 when called by the engine.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<F> RandomSource for F
where
    F: FnMut(usize) -> usize,
{
    fn pick_index(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Deterministic ChaCha8-backed generator.
///
/// Same seed, same sequence of picks.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().r#gen())
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}
