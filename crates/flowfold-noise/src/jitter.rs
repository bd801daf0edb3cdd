//! Isotropic Gaussian jitter on point coordinates.

use nalgebra::MatrixXx3;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::NoiseError;

/// Adds independent `N(0, sigma²)` noise to every coordinate of a point set.
///
/// Draws are taken row by row, `x, y, z` within a row.  With `sigma == 0`
/// nothing is drawn.
#[derive(Debug, Clone, Copy)]
pub struct Jitter {
    sigma: f64,
    normal: Normal<f64>,
}

impl Jitter {
    /// # Errors
    ///
    /// [`NoiseError::InvalidSigma`] if `sigma` is negative or not finite.
    pub fn isotropic(sigma: f64) -> Result<Self, NoiseError> {
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(NoiseError::InvalidSigma(sigma));
        }
        let normal = Normal::new(0.0, sigma).map_err(|_| NoiseError::InvalidSigma(sigma))?;
        Ok(Self { sigma, normal })
    }

    #[must_use]
    pub const fn sigma(&self) -> f64 {
        self.sigma
    }

    /// `true` if applying this jitter changes nothing and draws nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.sigma == 0.0
    }

    pub fn apply<R: Rng + ?Sized>(&self, points: &mut MatrixXx3<f64>, rng: &mut R) {
        if self.is_noop() {
            return;
        }
        for mut row in points.row_iter_mut() {
            for value in row.iter_mut() {
                *value += self.normal.sample(rng);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn rejects_bad_sigma() {
        assert_eq!(Jitter::isotropic(-0.1).unwrap_err(), NoiseError::InvalidSigma(-0.1));
        assert!(Jitter::isotropic(f64::NAN).is_err());
        assert!(Jitter::isotropic(f64::INFINITY).is_err());
    }

    #[test]
    fn zero_sigma_keeps_points_and_rng() {
        let jitter = Jitter::isotropic(0.0).unwrap();
        assert!(jitter.is_noop());
        let original = MatrixXx3::from_fn(4, |i, j| (i + j) as f64);
        let mut points = original.clone();
        let mut used = rng(9);
        jitter.apply(&mut points, &mut used);
        assert_eq!(points, original);
        assert_eq!(used.next_u64(), rng(9).next_u64());
    }

    #[test]
    fn draws_are_row_major() {
        let sigma = 0.7;
        let jitter = Jitter::isotropic(sigma).unwrap();
        let mut points = MatrixXx3::<f64>::zeros(3);
        jitter.apply(&mut points, &mut rng(5));

        let normal = Normal::new(0.0, sigma).unwrap();
        let mut reference = rng(5);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(points[(i, j)], normal.sample(&mut reference));
            }
        }
    }

    #[test]
    fn spread_matches_sigma() {
        let sigma = 0.25;
        let n = 8_000;
        let mut points = MatrixXx3::<f64>::zeros(n);
        Jitter::isotropic(sigma).unwrap().apply(&mut points, &mut rng(11));
        #[allow(clippy::cast_precision_loss)]
        let count = (3 * n) as f64;
        let mean = points.sum() / count;
        let std = (points.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count).sqrt();
        assert!(mean.abs() < 0.02, "mean {mean}");
        assert!((std - sigma).abs() < 0.02, "std {std}");
    }
}
