//! Stable index ordering ("order statistics").
//!
//! [`order_of`] returns the candidate indices sorted by the values they
//! point at.  The sort is stable: indices whose values compare equal keep
//! their relative input order.  Descending order flips the comparator, it
//! does not reverse the ascending result, so ties still resolve by input
//! order.
//!
//! Reals are compared with [`f64::total_cmp`]: `-0.0` sorts before `0.0`
//! and NaN sorts after every other value (before them when descending).
//! Callers that need a different NaN policy should filter first.

use std::cmp::Ordering;

use rnd_core::Real;

/// Sort direction for [`order_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Smallest value first.
    #[default]
    Ascending,
    /// Largest value first.
    Descending,
}

/// Sort `indices` by `values[index]` under `cmp`, stably.
///
/// Every index must be in range for `values`; an out-of-range index is a
/// programming error and panics.
pub fn order_by<T, F>(values: &[T], indices: &[usize], direction: Direction, mut cmp: F) -> Vec<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = indices.to_vec();
    match direction {
        Direction::Ascending => sorted.sort_by(|&a, &b| cmp(&values[a], &values[b])),
        Direction::Descending => sorted.sort_by(|&a, &b| cmp(&values[b], &values[a])),
    }
    sorted
}

/// Order the candidate `indices` of a real vector.
pub fn order_of(values: &[Real], indices: &[usize], direction: Direction) -> Vec<usize> {
    order_by(values, indices, direction, |a, b| a.total_cmp(b))
}

/// Order all indices of a real vector.
pub fn order(values: &[Real], direction: Direction) -> Vec<usize> {
    let all: Vec<usize> = (0..values.len()).collect();
    order_of(values, &all, direction)
}

/// Order the candidate `indices` of a vector of totally ordered keys.
pub fn order_of_ord<T: Ord>(values: &[T], indices: &[usize], direction: Direction) -> Vec<usize> {
    order_by(values, indices, direction, T::cmp)
}

/// Order all indices of a vector of totally ordered keys, ascending.
pub fn order_ord<T: Ord>(values: &[T]) -> Vec<usize> {
    let all: Vec<usize> = (0..values.len()).collect();
    order_of_ord(values, &all, Direction::Ascending)
}
