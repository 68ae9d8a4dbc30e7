//! Sequential contraction toward a target sum (the ZMBD workhorse).
//!
//! Elements are filled one at a time in the order given.  Before each draw
//! the element's range is narrowed to the values that still let the
//! unfilled tail reach the target:
//!
//! ```text
//! low  = max(lower[i], gap - tailUpper[i])
//! high = min(upper[i], gap - tailLower[i])
//! ```
//!
//! where `gap` is the target minus the partial sum and `tailLower[i]` /
//! `tailUpper[i]` are the bound sums of the elements after `i`.  With the
//! gap exactly closed the element is drawn uniformly from `[low, high]`;
//! otherwise it takes the value in `[low, high]` closest to the gap.
//!
//! The caller is responsible for feasibility (`Σlower <= target <= Σupper`)
//! and for any randomisation of the processing order.

use rnd_core::Real;
use tracing::trace;

use crate::random_numbers::UniformSource;
use crate::vector;

/// Fill a vector inside `[lower, upper]` whose elements sum to `target`.
pub(crate) fn contract_to_target<R: UniformSource + ?Sized>(
    lower: &[Real],
    upper: &[Real],
    target: Real,
    rng: &mut R,
) -> Vec<Real> {
    let tail_lower = tail_sums(lower);
    let tail_upper = tail_sums(upper);

    let mut gap = target;
    let mut values = Vec::with_capacity(lower.len());
    for idx in 0..lower.len() {
        let (own_lower, own_upper) = (lower[idx], upper[idx]);
        let low = own_lower.max(gap - tail_upper[idx]);
        let high = own_upper.min(gap - tail_lower[idx]);

        let value = if gap == 0.0 {
            if low == high {
                low
            } else {
                rng.uniform(low.min(high), low.max(high))
            }
        } else {
            gap.max(low).min(high)
        };
        // Rounding in the tail sums can push `low`/`high` a few ulps past
        // the element's own bounds.
        let value = value.max(own_lower).min(own_upper);

        trace!(idx, value, gap, "contracted element");
        gap -= value;
        values.push(value);
    }
    values
}

/// `tail[i] = values[i + 1] + ... + values[n - 1]`, as total minus prefix.
///
/// The last entry is exactly zero because [`vector::cumsum`] and
/// [`vector::sum`] accumulate in the same order.
fn tail_sums(values: &[Real]) -> Vec<Real> {
    let total = vector::sum(values);
    vector::cumsum(values)
        .into_iter()
        .map(|prefix| total - prefix)
        .collect()
}
