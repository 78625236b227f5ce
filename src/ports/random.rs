//! Random source port - the stochastic inputs of the learning loop
//!
//! Learning draws exactly two kinds of random numbers: a uniformly sampled
//! starting state and a uniformly chosen playable action. Abstracting them
//! lets tests script the exact sequence of draws.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

/// Source of the uniform draws used by Q-learning.
///
/// Every [`rand::Rng`] is a `RandomSource`, so a seeded [`StdRng`] can be
/// passed wherever one is expected.
///
/// # Examples
///
/// ```
/// use qroute::ports::{RandomSource, build_rng};
///
/// let mut rng = build_rng(Some(42));
/// let state = rng.uniform_index(9);
/// assert!(state < 9);
/// assert_eq!(rng.uniform_choice(&[]), None);
/// ```
pub trait RandomSource {
    /// Uniform integer in `0..upper`. `upper` must be positive.
    fn uniform_index(&mut self, upper: usize) -> usize;

    /// Uniform element of `candidates`, or `None` if it is empty.
    fn uniform_choice(&mut self, candidates: &[usize]) -> Option<usize>;
}

impl<R: Rng> RandomSource for R {
    fn uniform_index(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }

    fn uniform_choice(&mut self, candidates: &[usize]) -> Option<usize> {
        candidates.choose(self).copied()
    }
}

/// Seeded generator when `seed` is given, otherwise one seeded from the
/// thread-local RNG.
pub fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}
