//! Bounded random vectors that sum to a target.
//!
//! Given per-element bounds `lower[i] <= upper[i]` and a target total, both
//! samplers return a vector `x` with `lower[i] <= x[i] <= upper[i]` for every
//! `i` and `Σx == target` up to floating-point rounding.
//!
//! * [`BoundedSampler::zmbd`] / [`BoundedSampler::zmbd_with_target`]: the
//!   zero/target-mean bounded distribution.  Elements are filled one at a
//!   time, each narrowed so the rest can still reach the target.
//! * [`BoundedSampler::ttbd`]: the target-total bounded distribution.
//!   Elements are drawn independently, then the gap to the target is pushed
//!   through them in a single pass.
//!
//! Both run in a random processing order: a [`Permutation`] is drawn, the
//! bounds are gathered into that order, the workhorse runs, and the result
//! is gathered back through the inverse permutation.  This keeps which
//! elements settle at their extremes independent of their position.
//!
//! # Example
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use rnd_math::sampling::zmbd;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let x = zmbd(&[-4.0, -1.0, -1.0, -4.0], &[1.0, 5.0, 1.0, 1.0], &mut rng).unwrap();
//! assert!(x.iter().sum::<f64>().abs() < 1e-8);
//! ```

mod redistribute;
mod sequential;

use rnd_core::errors::{ErrorKind, Result};
use rnd_core::{ensure, fail, Real};
use tracing::debug;

use crate::comparison::{self, DEFAULT_TOLERANCE};
use crate::permutation::Permutation;
use crate::random_numbers::UniformSource;
use crate::vector;

/// Configured entry point for bounded sampling.
///
/// ```
/// use rnd_math::{BoundedSampler, MersenneTwisterUniformRng};
///
/// let sampler = BoundedSampler::new().with_tolerance(1e-12);
/// let mut rng = MersenneTwisterUniformRng::new(7);
/// let x = sampler.ttbd(5.0, &[2.0, 3.0], &[2.0, 3.0], &mut rng).unwrap();
/// assert_eq!(x, vec![2.0, 3.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedSampler {
    tolerance: Real,
    shuffled_order: bool,
}

impl Default for BoundedSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundedSampler {
    /// A sampler with the default tolerance and a shuffled processing order.
    pub fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            shuffled_order: true,
        }
    }

    /// Relative slack allowed when checking that the target lies within
    /// `[Σlower, Σupper]`.  It is scaled by the largest of `1`, `|Σlower|`,
    /// `|Σupper|` and `|target|`.
    pub fn with_tolerance(mut self, tolerance: Real) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Whether elements are processed in a random order (the default) or in
    /// input order.
    pub fn with_shuffled_order(mut self, flag: bool) -> Self {
        self.shuffled_order = flag;
        self
    }

    /// The configured relative tolerance.
    pub fn tolerance(&self) -> Real {
        self.tolerance
    }

    /// Whether the processing order is shuffled.
    pub fn shuffled_order(&self) -> bool {
        self.shuffled_order
    }

    /// Zero-mean bounded sample: a vector inside the bounds summing to zero.
    pub fn zmbd<R: UniformSource + ?Sized>(
        &self,
        lower: &[Real],
        upper: &[Real],
        rng: &mut R,
    ) -> Result<Vec<Real>> {
        self.zmbd_with_target(lower, upper, 0.0, rng)
    }

    /// Target-mean bounded sample: a vector inside the bounds summing to
    /// `target`.
    ///
    /// Whenever the partial sum sits exactly on the target the next element
    /// is drawn at random; otherwise it is chosen to close the gap.  A
    /// non-zero target therefore makes the leading elements (in processing
    /// order) deterministic until the gap first closes.
    ///
    /// # Errors
    /// * [`ErrorKind::DimensionMismatch`] if the bounds differ in length.
    /// * [`ErrorKind::InfeasibleBounds`] if some `lower[i] > upper[i]` or the
    ///   target is outside `[Σlower, Σupper]`, or the bounds are too large
    ///   for their sums and widths to stay finite.
    pub fn zmbd_with_target<R: UniformSource + ?Sized>(
        &self,
        lower: &[Real],
        upper: &[Real],
        target: Real,
        rng: &mut R,
    ) -> Result<Vec<Real>> {
        debug!(
            variant = "zmbd",
            dimension = lower.len(),
            total = target,
            "sampling bounded vector"
        );
        self.validate(lower, upper, target)?;
        Ok(self.in_processing_order(lower, upper, rng, |lo, hi, rng| {
            sequential::contract_to_target(lo, hi, target, rng)
        }))
    }

    /// Target-total bounded sample: independent uniform draws adjusted to
    /// sum to `target`.
    ///
    /// # Errors
    /// Same as [`BoundedSampler::zmbd_with_target`].
    pub fn ttbd<R: UniformSource + ?Sized>(
        &self,
        target: Real,
        lower: &[Real],
        upper: &[Real],
        rng: &mut R,
    ) -> Result<Vec<Real>> {
        debug!(
            variant = "ttbd",
            dimension = lower.len(),
            total = target,
            "sampling bounded vector"
        );
        self.validate(lower, upper, target)?;
        Ok(self.in_processing_order(lower, upper, rng, |lo, hi, rng| {
            redistribute::draw_and_redistribute(target, lo, hi, rng)
        }))
    }

    /// Permute the bounds, run `inner` on them, and restore input order.
    fn in_processing_order<R, F>(
        &self,
        lower: &[Real],
        upper: &[Real],
        rng: &mut R,
        inner: F,
    ) -> Vec<Real>
    where
        R: UniformSource + ?Sized,
        F: FnOnce(&[Real], &[Real], &mut R) -> Vec<Real>,
    {
        let permutation = if self.shuffled_order {
            Permutation::random(lower.len(), rng)
        } else {
            Permutation::identity(lower.len())
        };
        let values = inner(&permutation.apply(lower), &permutation.apply(upper), rng);
        permutation.inverse().apply(&values)
    }

    fn validate(&self, lower: &[Real], upper: &[Real], target: Real) -> Result<()> {
        check_bounds(lower, upper, target, self.tolerance).map_err(|err| {
            debug!(%err, "rejected sampling arguments");
            err
        })
    }
}

fn check_bounds(lower: &[Real], upper: &[Real], target: Real, tolerance: Real) -> Result<()> {
    ensure!(
        lower.len() == upper.len(),
        ErrorKind::DimensionMismatch,
        "lower and upper bounds must be of same length ({} vs {})",
        lower.len(),
        upper.len()
    );
    if let Some(i) = lower.iter().zip(upper).position(|(lo, hi)| lo > hi) {
        fail!(
            ErrorKind::InfeasibleBounds,
            "lower bound {} exceeds upper bound {} at index {i}",
            lower[i],
            upper[i]
        );
    }
    // Gaps, tail sums and draw widths all stay within twice this magnitude.
    let magnitude =
        vector::sum_of_absolutes(lower) + vector::sum_of_absolutes(upper) + target.abs();
    ensure!(
        (2.0 * magnitude).is_finite(),
        ErrorKind::InfeasibleBounds,
        "bounds and target overflow floating point (magnitude {magnitude})"
    );
    let lower_sum = vector::sum(lower);
    let upper_sum = vector::sum(upper);
    let slack = comparison::slack(tolerance, &[lower_sum, upper_sum, target]);
    ensure!(
        target >= lower_sum - slack && target <= upper_sum + slack,
        ErrorKind::InfeasibleBounds,
        "target {target} is outside the reachable range [{lower_sum}, {upper_sum}]"
    );
    Ok(())
}

/// [`BoundedSampler::zmbd`] with the default configuration.
pub fn zmbd<R: UniformSource + ?Sized>(
    lower: &[Real],
    upper: &[Real],
    rng: &mut R,
) -> Result<Vec<Real>> {
    BoundedSampler::default().zmbd(lower, upper, rng)
}

/// [`BoundedSampler::zmbd_with_target`] with the default configuration.
pub fn zmbd_with_target<R: UniformSource + ?Sized>(
    lower: &[Real],
    upper: &[Real],
    target: Real,
    rng: &mut R,
) -> Result<Vec<Real>> {
    BoundedSampler::default().zmbd_with_target(lower, upper, target, rng)
}

/// [`BoundedSampler::ttbd`] with the default configuration.
pub fn ttbd<R: UniformSource + ?Sized>(
    target: Real,
    lower: &[Real],
    upper: &[Real],
    rng: &mut R,
) -> Result<Vec<Real>> {
    BoundedSampler::default().ttbd(target, lower, upper, rng)
}
