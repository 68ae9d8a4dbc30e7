//! Dense matrix helpers over `nalgebra::DMatrix<f64>`.
//!
//! Column and row reductions plus a constructor that lays out a grid of
//! evenly spaced values per column.

use nalgebra::DMatrix;
use rnd_core::errors::{ErrorKind, Result};
use rnd_core::{ensure, Real};

use crate::vector;

/// A matrix with `rows` rows whose column `c` runs evenly from `lower[c]`
/// to `upper[c]`.
pub fn matrix_from_range(lower: &[Real], upper: &[Real], rows: usize) -> Result<DMatrix<Real>> {
    ensure!(
        lower.len() == upper.len(),
        ErrorKind::DimensionMismatch,
        "lower and upper limits must be of same length ({} vs {})",
        lower.len(),
        upper.len()
    );
    let columns: Vec<Vec<Real>> = lower
        .iter()
        .zip(upper)
        .map(|(&lo, &hi)| vector::sequence(lo, hi, rows))
        .collect();
    Ok(DMatrix::from_fn(rows, lower.len(), |r, c| columns[c][r]))
}

/// Sum of each column.
pub fn col_sums(m: &DMatrix<Real>) -> Vec<Real> {
    (0..m.ncols()).map(|c| m.column(c).sum()).collect()
}

/// Sum of each row.
pub fn row_sums(m: &DMatrix<Real>) -> Vec<Real> {
    (0..m.nrows()).map(|r| m.row(r).sum()).collect()
}

/// Mean of each column.  Empty when the matrix has no rows.
pub fn col_means(m: &DMatrix<Real>) -> Vec<Real> {
    if m.nrows() == 0 {
        return Vec::new();
    }
    let n = m.nrows() as Real;
    col_sums(m).into_iter().map(|s| s / n).collect()
}

/// Mean of each row.  Empty when the matrix has no columns.
pub fn row_means(m: &DMatrix<Real>) -> Vec<Real> {
    if m.ncols() == 0 {
        return Vec::new();
    }
    let n = m.ncols() as Real;
    row_sums(m).into_iter().map(|s| s / n).collect()
}

/// Sample standard deviation (Bessel-corrected) of each column.
///
/// Every column is `None` when the matrix has fewer than two rows.
pub fn col_std_devs(m: &DMatrix<Real>) -> Vec<Option<Real>> {
    let n = m.nrows();
    (0..m.ncols())
        .map(|c| {
            if n < 2 {
                return None;
            }
            let column = m.column(c);
            let mean = column.sum() / n as Real;
            let ss = column.iter().fold(0.0, |acc, x| acc + (x - mean) * (x - mean));
            Some((ss / (n as Real - 1.0)).sqrt())
        })
        .collect()
}
