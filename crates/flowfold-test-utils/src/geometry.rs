//! Geometric helpers for checking sampler output.

use flowfold_core::PointSet;
use nalgebra::DMatrix;

/// Symmetric `n × n` matrix of Euclidean distances between rows.
pub fn pairwise_distances(points: &PointSet) -> DMatrix<f64> {
    let n = points.nrows();
    DMatrix::from_fn(n, n, |i, j| (points.row(i) - points.row(j)).norm())
}

/// Largest absolute change of any pairwise distance between two point sets
/// with the same number of rows.
///
/// # Panics
///
/// Panics if the row counts differ.
pub fn max_distance_change(before: &PointSet, after: &PointSet) -> f64 {
    assert_eq!(before.nrows(), after.nrows(), "row count mismatch");
    (pairwise_distances(before) - pairwise_distances(after)).amax()
}
