//! Uniform offsets along one coordinate axis, used to extrude planar curves.

use nalgebra::MatrixXx3;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::error::NoiseError;

/// Shifts one column of a point set by independent `U[-extent/2, extent/2)`
/// offsets, one draw per row.  The other columns are left untouched.
#[derive(Debug, Clone, Copy)]
pub struct AxisOffset {
    axis: usize,
    extent: f64,
    dist: Option<Uniform<f64>>,
}

impl AxisOffset {
    /// Offsets centred on zero along `axis` (`0..3`).
    ///
    /// An extent too small to give a non-empty interval draws nothing.
    ///
    /// # Errors
    ///
    /// [`NoiseError::InvalidAxis`] for `axis >= 3`,
    /// [`NoiseError::InvalidExtent`] for a negative or non-finite extent.
    pub fn centered(axis: usize, extent: f64) -> Result<Self, NoiseError> {
        if axis >= 3 {
            return Err(NoiseError::InvalidAxis(axis));
        }
        if !extent.is_finite() || extent < 0.0 {
            return Err(NoiseError::InvalidExtent(extent));
        }
        let half = extent / 2.0;
        let dist = (half > 0.0).then(|| Uniform::new(-half, half));
        Ok(Self { axis, extent, dist })
    }

    #[must_use]
    pub const fn axis(&self) -> usize {
        self.axis
    }

    #[must_use]
    pub const fn extent(&self) -> f64 {
        self.extent
    }

    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.dist.is_none()
    }

    pub fn apply<R: Rng + ?Sized>(&self, points: &mut MatrixXx3<f64>, rng: &mut R) {
        let Some(dist) = self.dist else {
            return;
        };
        for value in points.column_mut(self.axis).iter_mut() {
            *value += dist.sample(rng);
        }
    }
}
