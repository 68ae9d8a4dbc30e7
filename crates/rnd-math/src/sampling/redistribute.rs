//! Independent draws followed by a single redistribution pass (the TTBD
//! workhorse).

use rnd_core::Real;
use tracing::trace;

use crate::random_numbers::UniformSource;
use crate::vector;

/// Draw every element uniformly in its own bounds, then walk forward
/// shifting each element as far toward the target as its bounds allow until
/// the outstanding gap is zero.
///
/// Requires `Σlower <= target <= Σupper` for the gap to close.
pub(crate) fn draw_and_redistribute<R: UniformSource + ?Sized>(
    target: Real,
    lower: &[Real],
    upper: &[Real],
    rng: &mut R,
) -> Vec<Real> {
    let mut values: Vec<Real> = lower
        .iter()
        .zip(upper)
        .map(|(&lo, &hi)| rng.uniform(lo, hi))
        .collect();

    let mut gap = target - vector::sum(&values);
    for (idx, value) in values.iter_mut().enumerate() {
        if gap == 0.0 {
            break;
        }
        let shift = if gap > 0.0 {
            (upper[idx] - *value).min(gap)
        } else {
            (lower[idx] - *value).max(gap)
        };
        *value += shift;
        gap -= shift;
        trace!(idx, shift, gap, "redistributed gap");
    }
    values
}
