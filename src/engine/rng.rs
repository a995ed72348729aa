//! Deterministic random number generation.
//!
//! Wraps PCG (Permuted Congruential Generator) so that array generation is
//! reproducible from a single master seed. When no seed is configured one is
//! drawn from OS entropy and kept, so any run can be replayed later.

use rand::prelude::*;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

/// Deterministic, reproducible random number generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizRng {
    /// Master seed for reproducibility.
    master_seed: u64,
    /// Internal PCG state.
    rng: Pcg64,
}

impl VizRng {
    /// Create a new RNG with the given master seed.
    #[must_use]
    pub fn new(master_seed: u64) -> Self {
        Self {
            master_seed,
            rng: Pcg64::seed_from_u64(master_seed),
        }
    }

    /// Create an RNG seeded from OS entropy. The chosen seed is retained.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Create from an optional seed, falling back to entropy.
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// Get the master seed.
    #[must_use]
    pub const fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Generate a uniformly distributed `u32` in `[min, max]` (inclusive).
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn gen_range_u32(&mut self, min: u32, max: u32) -> u32 {
        assert!(min <= max, "Invalid range: min > max");
        self.rng.gen_range(min..=max)
    }

    /// Generate `n` values in `[min, max]`.
    #[must_use]
    pub fn sample_n_u32(&mut self, n: usize, min: u32, max: u32) -> Vec<u32> {
        (0..n).map(|_| self.gen_range_u32(min, max)).collect()
    }
}
