//! Tolerance helpers.

use rnd_core::Real;

/// Default relative tolerance for feasibility checks.
pub const DEFAULT_TOLERANCE: Real = 1e-9;

/// Scale a relative `tolerance` by the largest magnitude in `magnitudes`,
/// never by less than one.
///
/// The result is an absolute slack suitable for comparing sums of those
/// magnitudes.
#[inline]
pub fn slack(tolerance: Real, magnitudes: &[Real]) -> Real {
    let scale = magnitudes.iter().fold(1.0, |acc: Real, m| acc.max(m.abs()));
    tolerance * scale
}
