//! Random index permutations and their inverses.
//!
//! A [`Permutation`] is a bijection on `0..n`.  The samplers draw one per
//! call, gather their inputs into the permuted order, work there, and
//! gather the result back through the inverse.

use rnd_core::errors::{ErrorKind, Result};
use rnd_core::{ensure, Size};

use crate::order;
use crate::random_numbers::UniformSource;

/// A bijection on `0..n`, stored as the image of each position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// The identity permutation on `0..n`.
    pub fn identity(n: Size) -> Self {
        Self((0..n).collect())
    }

    /// A uniformly random permutation of `0..n` (Fisher–Yates, driven by
    /// `rng`).
    pub fn random<R: UniformSource + ?Sized>(n: Size, rng: &mut R) -> Self {
        let mut indices: Vec<usize> = (0..n).collect();
        rng.shuffle(&mut indices);
        Self(indices)
    }

    /// Wrap an index vector, checking that it is a bijection on
    /// `0..indices.len()`.
    pub fn from_vec(indices: Vec<usize>) -> Result<Self> {
        let n = indices.len();
        let mut seen = vec![false; n];
        for (position, &index) in indices.iter().enumerate() {
            ensure!(
                index < n,
                ErrorKind::MalformedPermutation,
                "index {index} at position {position} is out of range for length {n}"
            );
            ensure!(
                !seen[index],
                ErrorKind::MalformedPermutation,
                "index {index} appears more than once"
            );
            seen[index] = true;
        }
        Ok(Self(indices))
    }

    /// Number of elements permuted.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` for the permutation of zero elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The indices as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Consume and return the indices.
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// The inverse permutation: `self.inverse().apply(&self.apply(v)) == v`.
    ///
    /// Obtained as the ascending order of the indices themselves.
    pub fn inverse(&self) -> Self {
        Self(order::order_ord(&self.0))
    }

    /// Gather `values` into this order: `out[k] = values[self[k]]`.
    ///
    /// Panics if `values` is shorter than the permutation.
    pub fn apply<T: Clone>(&self, values: &[T]) -> Vec<T> {
        apply_indices(values, &self.0)
    }
}

/// Gather: `out[k] = values[indices[k]]`.
///
/// Every index must be in range; an out-of-range index is a programming
/// error and panics.
pub fn apply_indices<T: Clone>(values: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| values[i].clone()).collect()
}
