//! Point-set level noise: isotropic Gaussian jitter.

use flowfold_core::{ManifoldError, PointSet};
use flowfold_noise::prelude::*;
use rand::Rng;

/// Add independent `N(0, sigma²)` noise to every coordinate of `points`.
///
/// `sigma == 0` returns the input unchanged and consumes no randomness.
///
/// # Errors
///
/// [`ManifoldError::InvalidSigma`] if `sigma` is negative or not finite.
pub fn add_noise<R: Rng + ?Sized>(
    mut points: PointSet,
    sigma: f64,
    rng: &mut R,
) -> Result<PointSet, ManifoldError> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(ManifoldError::InvalidSigma(sigma));
    }
    Jitter::isotropic(sigma)?.apply(&mut points, rng);
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowfold_test_utils::seeded_rng;

    #[test]
    fn zero_sigma_is_exact_passthrough() {
        let points = PointSet::from_fn(50, |i, j| (i * 3 + j) as f64 * 0.1 - 2.0);
        let noisy = add_noise(points.clone(), 0.0, &mut seeded_rng(1)).unwrap();
        assert_eq!(noisy, points);
    }

    #[test]
    fn negative_sigma_rejected() {
        let err = add_noise(PointSet::zeros(3), -0.5, &mut seeded_rng(1)).unwrap_err();
        assert_eq!(err, ManifoldError::InvalidSigma(-0.5));
        assert!(add_noise(PointSet::zeros(3), f64::NAN, &mut seeded_rng(1)).is_err());
    }

    #[test]
    fn noise_statistics_match_sigma() {
        let sigma = 0.3;
        let n = 10_000;
        let noisy = add_noise(PointSet::zeros(n), sigma, &mut seeded_rng(7)).unwrap();
        #[allow(clippy::cast_precision_loss)]
        let count = n as f64;
        for axis in 0..3 {
            let col = noisy.column(axis);
            let mean = col.sum() / count;
            let var = col.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;
            assert!(mean.abs() < 0.02, "axis {axis} mean {mean}");
            assert!((var.sqrt() - sigma).abs() < 0.02, "axis {axis} std {}", var.sqrt());
        }
    }

    #[test]
    fn same_seed_same_noise() {
        let a = add_noise(PointSet::zeros(20), 1.0, &mut seeded_rng(3)).unwrap();
        let b = add_noise(PointSet::zeros(20), 1.0, &mut seeded_rng(3)).unwrap();
        assert_eq!(a, b);
    }
}
