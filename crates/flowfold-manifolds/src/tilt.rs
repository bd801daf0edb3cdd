//! Rigid rotations that lift planar curves into arbitrary orientations.
//!
//! [`xy_tilt`] rotates a 3D point set and its flows about the x axis and then
//! the y axis.  [`PlaneRotations`] generalizes this to `d` dimensions with one
//! rotation per adjacent axis pair.
//!
//! Data is stored one sample per row, so rotations are applied by
//! right-multiplication (`X · R`).

use flowfold_core::{FlowSet, ManifoldError, PointSet};
use nalgebra::{DMatrix, Matrix3};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Tilt
// ---------------------------------------------------------------------------

/// Two tilt angles in radians: about the x axis, then about the y axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Tilt {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl Tilt {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `true` for the identity orientation `(0, 0)`.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Rotation about the x axis, in row-vector convention.
    #[must_use]
    pub fn x_rotation(&self) -> Matrix3<f64> {
        let (s, c) = self.x.sin_cos();
        Matrix3::new(
            1.0, 0.0, 0.0, //
            0.0, c, s, //
            0.0, -s, c,
        )
    }

    /// Rotation about the y axis, in row-vector convention.
    #[must_use]
    pub fn y_rotation(&self) -> Matrix3<f64> {
        let (s, c) = self.y.sin_cos();
        Matrix3::new(
            c, 0.0, -s, //
            0.0, 1.0, 0.0, //
            s, 0.0, c,
        )
    }

    pub(crate) fn validate(&self) -> Result<(), ManifoldError> {
        if !self.x.is_finite() {
            return Err(ManifoldError::NonFinite {
                name: "xtilt",
                value: self.x,
            });
        }
        if !self.y.is_finite() {
            return Err(ManifoldError::NonFinite {
                name: "ytilt",
                value: self.y,
            });
        }
        Ok(())
    }
}

/// Rotate points and flows by `Rx(tilt.x)` followed by `Ry(tilt.y)`.
///
/// Both sets go through the same orthonormal matrices, so the geometry
/// between each point and its flow is preserved.  The zero tilt leaves every
/// coordinate unchanged.
#[must_use]
pub fn xy_tilt(points: &PointSet, flows: &FlowSet, tilt: Tilt) -> (PointSet, FlowSet) {
    let rx = tilt.x_rotation();
    let ry = tilt.y_rotation();
    (points * rx * ry, flows * rx * ry)
}

// ---------------------------------------------------------------------------
// PlaneRotations
// ---------------------------------------------------------------------------

/// Successive rotations of the `(i, i+1)` coordinate planes of a
/// `d`-dimensional space, one angle per plane.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneRotations {
    dim: usize,
    matrices: Vec<DMatrix<f64>>,
}

impl PlaneRotations {
    /// Build `dim - 1` plane rotations from `angles`.
    ///
    /// # Errors
    ///
    /// [`ManifoldError::EmptyDimension`] if `dim == 0`, and
    /// [`ManifoldError::TiltAngleMismatch`] unless `angles.len() == dim - 1`.
    pub fn new(dim: usize, angles: &[f64]) -> Result<Self, ManifoldError> {
        if dim == 0 {
            return Err(ManifoldError::EmptyDimension);
        }
        if angles.len() != dim - 1 {
            return Err(ManifoldError::TiltAngleMismatch {
                dim,
                expected: dim - 1,
                got: angles.len(),
            });
        }
        if let Some(&bad) = angles.iter().find(|a| !a.is_finite()) {
            return Err(ManifoldError::NonFinite {
                name: "tilt angle",
                value: bad,
            });
        }

        let matrices = angles
            .iter()
            .enumerate()
            .map(|(i, &angle)| {
                let (s, c) = angle.sin_cos();
                let mut a = DMatrix::<f64>::identity(dim, dim);
                a[(i, i)] = c;
                a[(i + 1, i + 1)] = c;
                a[(i, i + 1)] = s;
                a[(i + 1, i)] = -s;
                a
            })
            .collect();

        Ok(Self { dim, matrices })
    }

    #[must_use]
    pub const fn dim(&self) -> usize {
        self.dim
    }

    /// The plane rotation matrices, in application order.
    #[must_use]
    pub fn matrices(&self) -> &[DMatrix<f64>] {
        &self.matrices
    }

    /// The product of all plane rotations.
    #[must_use]
    pub fn composed(&self) -> DMatrix<f64> {
        self.matrices
            .iter()
            .fold(DMatrix::identity(self.dim, self.dim), |acc, m| acc * m)
    }

    /// Right-multiply `x` (`n × dim`) by each rotation in order.
    ///
    /// # Errors
    ///
    /// [`ManifoldError::TiltAngleMismatch`] if `x` does not have `dim` columns.
    pub fn apply(&self, x: &DMatrix<f64>) -> Result<DMatrix<f64>, ManifoldError> {
        if x.ncols() != self.dim {
            return Err(ManifoldError::TiltAngleMismatch {
                dim: x.ncols(),
                expected: x.ncols().saturating_sub(1),
                got: self.matrices.len(),
            });
        }
        Ok(self
            .matrices
            .iter()
            .fold(x.clone(), |tilted, tilter| tilted * tilter))
    }
}

/// Tilt `n × d` data by `d - 1` plane rotations.
///
/// Returns the rotated data together with the rotation matrices used.
///
/// # Errors
///
/// [`ManifoldError::TiltAngleMismatch`] unless `angles.len() == d - 1`, and
/// [`ManifoldError::EmptyDimension`] for data without columns.
pub fn rotation_transform(
    x: &DMatrix<f64>,
    angles: &[f64],
) -> Result<(DMatrix<f64>, Vec<DMatrix<f64>>), ManifoldError> {
    let rotations = PlaneRotations::new(x.ncols(), angles)?;
    let tilted = rotations.apply(x)?;
    Ok((tilted, rotations.matrices))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
