//! # rnd-math
//!
//! Constrained random vectors and the machinery behind them.
//!
//! The centre of the crate is [`sampling`]: drawing a random vector whose
//! elements stay inside per-element bounds while summing exactly to a
//! target.  Supporting it are random index [`permutation`]s, stable
//! [`order`] statistics and a pluggable uniform random source.  The
//! remaining modules are elementary vector and matrix helpers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Tolerance helpers for feasibility checks.
pub mod comparison;

/// Dense matrix helpers over `nalgebra::DMatrix`.
pub mod matrix;

/// Stable index ordering.
pub mod order;

/// Random index permutations and their inverses.
pub mod permutation;

/// Uniform random sources.
pub mod random_numbers;

/// Rounding to a step.
pub mod rounding;

/// Bounded random vectors summing to a target.
pub mod sampling;

/// Elementary slice primitives.
pub mod vector;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::{slack, DEFAULT_TOLERANCE};
pub use order::{order, order_of, Direction};
pub use permutation::{apply_indices, Permutation};
pub use random_numbers::{MersenneTwisterUniformRng, UniformSource};
pub use rounding::{round_to_step, Rounding};
pub use sampling::{ttbd, zmbd, zmbd_with_target, BoundedSampler};
