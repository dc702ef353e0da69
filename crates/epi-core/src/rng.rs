//! Deterministic simulation-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! Every simulator owns exactly one `SimRng`, seeded from
//! [`SimConfig::seed`][crate::SimConfig::seed], and lends it by `&mut` to the
//! transition model and to each policy in turn.  There is no process-wide
//! generator, so:
//!
//! - Two simulators in the same process never interleave draws.
//! - A run is reproduced by its seed and inputs alone.
//! - Independent rollouts derive child streams with [`SimRng::child`], which
//!   mixes the parent's next draw with the rollout offset.

use rand::distributions::WeightedIndex;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulator-owned RNG.
///
/// Not `Clone`: duplicating a stream would make two "independent" rollouts
/// draw identical numbers.  Use [`child`](Self::child) instead.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` salted with `offset`.  Used to seed each
    /// copied simulator deterministically from its parent.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Draw an index with probability proportional to `weights[i]`.
    ///
    /// Returns `None` if `weights` is empty, sums to zero, or holds an
    /// invalid (negative / non-finite) weight.
    pub fn choose_weighted(&mut self, weights: &[f64]) -> Option<usize> {
        let dist = WeightedIndex::new(weights).ok()?;
        Some(self.0.sample(dist))
    }
}

impl std::fmt::Debug for SimRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SimRng(..)")
    }
}
