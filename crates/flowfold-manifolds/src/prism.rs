//! Extrusion of planar curves into ribbons, cylinders and swiss rolls.
//!
//! A composite sampler runs its base curve sampler and then shifts every
//! point along z by an independent `U[-h/2, h/2)` offset.  Flows and labels
//! pass through untouched.

use flowfold_core::{ManifoldError, ManifoldSample, PointSet};
use flowfold_noise::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::curve::{CurveKind, CurveParams};

pub(crate) const fn default_height() -> f64 {
    20.0
}

/// Parameters of the composite (extruded) samplers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrismParams {
    /// Parameters of the underlying curve (default: 1000 nodes).
    #[serde(flatten)]
    pub curve: CurveParams,
    /// Extent of the extrusion along z (default: 20).
    #[serde(default = "default_height")]
    pub height: f64,
}

impl Default for PrismParams {
    fn default() -> Self {
        Self {
            curve: CurveParams::default().with_num_nodes(1000),
            height: default_height(),
        }
    }
}

impl PrismParams {
    #[must_use]
    pub const fn new(curve: CurveParams, height: f64) -> Self {
        Self { curve, height }
    }

    #[must_use]
    pub const fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub const fn with_curve(mut self, curve: CurveParams) -> Self {
        self.curve = curve;
        self
    }
}

fn validate_height(height: f64) -> Result<(), ManifoldError> {
    if !height.is_finite() || height < 0.0 {
        return Err(ManifoldError::InvalidHeight(height));
    }
    Ok(())
}

/// Add `num_nodes` independent `U[-height/2, height/2)` offsets to the z
/// column of `points`.  The x and y columns are not modified.
///
/// `height == 0` returns the points unchanged and consumes no randomness.
///
/// # Errors
///
/// [`ManifoldError::NodeCountMismatch`] if `num_nodes` differs from the row
/// count, [`ManifoldError::InvalidHeight`] for a negative or non-finite
/// height.
pub fn generate_prism<R: Rng + ?Sized>(
    rng: &mut R,
    num_nodes: usize,
    mut points: PointSet,
    height: f64,
) -> Result<PointSet, ManifoldError> {
    if num_nodes != points.nrows() {
        return Err(ManifoldError::NodeCountMismatch {
            num_nodes,
            points: points.nrows(),
        });
    }
    validate_height(height)?;
    if height == 0.0 {
        return Ok(points);
    }
    AxisOffset::centered(2, height)?.apply(&mut points, rng);
    trace!(num_nodes, height, "extruded point set");
    Ok(points)
}

/// Run the `kind` base sampler and extrude its points.
pub(crate) fn sample_prism<R: Rng + ?Sized>(
    kind: CurveKind,
    rng: &mut R,
    params: &PrismParams,
) -> Result<ManifoldSample, ManifoldError> {
    validate_height(params.height)?;
    let sample = kind.sample(rng, &params.curve)?;
    let (points, flows, labels) = sample.into_parts();
    let points = generate_prism(rng, params.curve.num_nodes, points, params.height)?;
    ManifoldSample::new(points, flows, labels)
}

/// Directed circle extruded into a cylinder.
///
/// # Errors
///
/// Invalid-argument [`ManifoldError`] for bad parameters.
pub fn directed_cylinder<R: Rng + ?Sized>(
    rng: &mut R,
    params: &PrismParams,
) -> Result<ManifoldSample, ManifoldError> {
    sample_prism(CurveKind::Circle, rng, params)
}

/// Directed spiral extruded into a swiss roll.
///
/// # Errors
///
/// Invalid-argument [`ManifoldError`] for bad parameters.
pub fn directed_swiss_roll<R: Rng + ?Sized>(
    rng: &mut R,
    params: &PrismParams,
) -> Result<ManifoldSample, ManifoldError> {
    sample_prism(CurveKind::Spiral, rng, params)
}

/// Swiss roll over the outward-biased spiral with unit flows.
///
/// # Errors
///
/// Invalid-argument [`ManifoldError`] for bad parameters.
pub fn directed_swiss_roll_uniform<R: Rng + ?Sized>(
    rng: &mut R,
    params: &PrismParams,
) -> Result<ManifoldSample, ManifoldError> {
    sample_prism(CurveKind::SpiralUniform, rng, params)
}

/// Swiss roll over the delayed spiral.
///
/// # Errors
///
/// Invalid-argument [`ManifoldError`] for bad parameters.
pub fn directed_swiss_roll_delayed<R: Rng + ?Sized>(
    rng: &mut R,
    params: &PrismParams,
) -> Result<ManifoldSample, ManifoldError> {
    sample_prism(CurveKind::SpiralDelayed, rng, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowfold_test_utils::seeded_rng;

    #[test]
    fn prism_only_moves_z() {
        let points = PointSet::from_fn(200, |i, j| if j == 2 { 0.0 } else { i as f64 });
        let out = generate_prism(&mut seeded_rng(2), 200, points.clone(), 4.0).unwrap();
        for i in 0..200 {
            assert_eq!(out[(i, 0)], points[(i, 0)]);
            assert_eq!(out[(i, 1)], points[(i, 1)]);
            assert!((-2.0..2.0).contains(&out[(i, 2)]), "z={}", out[(i, 2)]);
        }
    }

    #[test]
    fn prism_offsets_spread_over_height() {
        let out = generate_prism(&mut seeded_rng(2), 1000, PointSet::zeros(1000), 10.0).unwrap();
        let z = out.column(2);
        assert!(z.min() < -4.0);
        assert!(z.max() > 4.0);
    }

    #[test]
    fn zero_height_is_noop() {
        let points = PointSet::from_element(5, 1.5);
        let out = generate_prism(&mut seeded_rng(2), 5, points.clone(), 0.0).unwrap();
        assert_eq!(out, points);
    }

    #[test]
    fn prism_rejects_bad_arguments() {
        let mut rng = seeded_rng(0);
        assert_eq!(
            generate_prism(&mut rng, 4, PointSet::zeros(3), 1.0).unwrap_err(),
            ManifoldError::NodeCountMismatch {
                num_nodes: 4,
                points: 3
            }
        );
        assert_eq!(
            generate_prism(&mut rng, 3, PointSet::zeros(3), -1.0).unwrap_err(),
            ManifoldError::InvalidHeight(-1.0)
        );
    }

    #[test]
    fn composite_rejects_negative_height_before_sampling() {
        let params = PrismParams::default().with_height(-3.0);
        assert_eq!(
            directed_swiss_roll(&mut seeded_rng(0), &params).unwrap_err(),
            ManifoldError::InvalidHeight(-3.0)
        );
    }

    #[test]
    fn defaults_match_composite_conventions() {
        let params = PrismParams::default();
        assert_eq!(params.curve.num_nodes, 1000);
        assert_eq!(params.height, 20.0);
    }

    #[test]
    fn params_deserialize_flattened() {
        let params: PrismParams = toml::from_str("num_nodes = 30\nheight = 5.0\nsigma = 0.1").unwrap();
        assert_eq!(params.curve.num_nodes, 30);
        assert_eq!(params.height, 5.0);
        assert_eq!(params.curve.sigma, 0.1);
    }

    #[test]
    fn swiss_roll_variants_keep_lengths() {
        let params = PrismParams::default().with_curve(CurveParams::default().with_num_nodes(77));
        let mut rng = seeded_rng(4);
        for sample in [
            directed_cylinder(&mut rng, &params).unwrap(),
            directed_swiss_roll(&mut rng, &params).unwrap(),
            directed_swiss_roll_uniform(&mut rng, &params).unwrap(),
            directed_swiss_roll_delayed(&mut rng, &params).unwrap(),
        ] {
            assert_eq!(sample.len(), 77);
            assert_eq!(sample.points().nrows(), 77);
            assert_eq!(sample.flows().nrows(), 77);
            assert!(sample.labels_sorted());
        }
    }
}
