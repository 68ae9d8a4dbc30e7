//! Elementary operations on slices of reals.
//!
//! These are plain reductions and constructors.  The bounded samplers use
//! [`sum`] and [`cumsum`] to build their contingency sums; the rest are
//! general conveniences.

use rnd_core::errors::{ErrorKind, Result};
use rnd_core::{ensure, Real};

/// Which side a limit applies to in [`ensure_limit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Limit {
    /// Values below the limit are raised to it.
    Lower,
    /// Values above the limit are lowered to it.
    Upper,
}

/// Sum of the elements, accumulated left to right.
pub fn sum(values: &[Real]) -> Real {
    values.iter().fold(0.0, |acc, x| acc + x)
}

/// Sum of the absolute values of the elements.
pub fn sum_of_absolutes(values: &[Real]) -> Real {
    values.iter().fold(0.0, |acc, x| acc + x.abs())
}

/// Arithmetic mean.  Returns `None` for an empty slice.
pub fn mean(values: &[Real]) -> Option<Real> {
    if values.is_empty() {
        None
    } else {
        Some(sum(values) / values.len() as Real)
    }
}

/// Median.  Even lengths average the two middle elements.
///
/// Returns `None` for an empty slice.
pub fn median(values: &[Real]) -> Option<Real> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Running sums: `out[i] = values[0] + ... + values[i]`.
///
/// Accumulates in the same order as [`sum`], so the last element equals
/// `sum(values)` exactly.
pub fn cumsum(values: &[Real]) -> Vec<Real> {
    let mut acc = 0.0;
    values
        .iter()
        .map(|x| {
            acc += x;
            acc
        })
        .collect()
}

/// `length` evenly spaced values from `start` to `end` inclusive.
///
/// A single-element sequence is `[start]`.
pub fn sequence(start: Real, end: Real, length: usize) -> Vec<Real> {
    let divisor = if length <= 1 { 1 } else { length - 1 };
    let step = (end - start) / divisor as Real;
    (0..length).map(|i| start + i as Real * step).collect()
}

/// A vector of `n` copies of `value`.
pub fn repeat(value: Real, n: usize) -> Vec<Real> {
    vec![value; n]
}

/// Element-wise minimum of two equally long slices.
pub fn pairwise_min(a: &[Real], b: &[Real]) -> Result<Vec<Real>> {
    check_same_length(a.len(), b.len())?;
    Ok(a.iter().zip(b).map(|(x, y)| x.min(*y)).collect())
}

/// Element-wise maximum of two equally long slices.
pub fn pairwise_max(a: &[Real], b: &[Real]) -> Result<Vec<Real>> {
    check_same_length(a.len(), b.len())?;
    Ok(a.iter().zip(b).map(|(x, y)| x.max(*y)).collect())
}

/// Floor (`Limit::Lower`) or cap (`Limit::Upper`) every element at `limit`.
pub fn ensure_limit(values: &[Real], limit: Real, side: Limit) -> Vec<Real> {
    values
        .iter()
        .map(|&x| match side {
            Limit::Lower if x < limit => limit,
            Limit::Upper if x > limit => limit,
            _ => x,
        })
        .collect()
}

/// Keep the elements whose matching predicate entry is `true`.
pub fn select_by_predicate<T: Clone>(values: &[T], predicate: &[bool]) -> Result<Vec<T>> {
    check_same_length(values.len(), predicate.len())?;
    Ok(values
        .iter()
        .zip(predicate)
        .filter(|(_, keep)| **keep)
        .map(|(v, _)| v.clone())
        .collect())
}

fn check_same_length(a: usize, b: usize) -> Result<()> {
    ensure!(
        a == b,
        ErrorKind::DimensionMismatch,
        "operands must be of same length ({a} vs {b})"
    );
    Ok(())
}
