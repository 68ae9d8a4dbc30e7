//! Uniform random sources.
//!
//! The samplers never reach for a global generator: every call takes a
//! [`UniformSource`] so tests can substitute a seeded one.  Any
//! `rand::Rng` is a `UniformSource`, including the Mersenne Twister wrapper
//! defined here.
//!
//! A source carries mutable state.  Callers sharing one across threads must
//! synchronise access themselves; the usual pattern is one source per
//! thread.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use rand_mt::Mt19937GenRand64;
use rnd_core::Real;

/// The random capability the samplers depend on.
pub trait UniformSource {
    /// Draw uniformly from the closed interval `[low, high]`.
    ///
    /// Returns `low` when `low == high`.  Requires `low <= high` and both
    /// finite.
    fn uniform(&mut self, low: Real, high: Real) -> Real;

    /// Permute `indices` in place, uniformly over all orderings.
    fn shuffle(&mut self, indices: &mut [usize]);
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn uniform(&mut self, low: Real, high: Real) -> Real {
        if low == high {
            low
        } else {
            self.gen_range(low..=high)
        }
    }

    fn shuffle(&mut self, indices: &mut [usize]) {
        SliceRandom::shuffle(indices, self);
    }
}

/// A uniform pseudo-random number generator based on the Mersenne Twister
/// MT19937-64 algorithm.
pub struct MersenneTwisterUniformRng {
    rng: Mt19937GenRand64,
}

impl MersenneTwisterUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
        }
    }
}

impl RngCore for MersenneTwisterUniformRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.fill_bytes(dest);
        Ok(())
    }
}
