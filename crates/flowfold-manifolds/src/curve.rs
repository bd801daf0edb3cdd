//! Base samplers: directed circles and spirals in a tilted plane.
//!
//! Every sampler follows the same steps:
//!
//! 1. draw `num_nodes` parameters θ and sort them; they become the labels,
//! 2. map θ to a point `(x, y, 0)` on the curve,
//! 3. map `α = θ + π/2` to a flow `(u, v, 0)`, negated when `inverse` is set,
//! 4. tilt points and flows with [`xy_tilt`],
//! 5. add Gaussian noise to the points only.
//!
//! The four curve families differ only in the θ distribution and in the
//! tangent scaling, captured by [`CurveKind`].

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use flowfold_core::{FlowSet, ManifoldError, ManifoldSample, PointSet};
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::noise::add_noise;
use crate::tilt::{Tilt, xy_tilt};

const fn default_num_nodes() -> usize {
    500
}
pub(crate) const fn default_radius() -> f64 {
    1.0
}
pub(crate) const fn default_num_spirals() -> f64 {
    1.5
}

// ---------------------------------------------------------------------------
// CurveParams
// ---------------------------------------------------------------------------

/// Parameters shared by all base samplers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveParams {
    /// Number of points to draw (default: 500).
    #[serde(default = "default_num_nodes")]
    pub num_nodes: usize,
    /// Scale of the curve (default: 1).
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Number of revolutions of a spiral (default: 1.5).  Ignored by circles.
    #[serde(default = "default_num_spirals")]
    pub num_spirals: f64,
    /// Orientation of the curve's plane.
    #[serde(default)]
    pub tilt: Tilt,
    /// Standard deviation of the Gaussian noise added to points.
    #[serde(default)]
    pub sigma: f64,
    /// Flip the direction of every flow.
    #[serde(default)]
    pub inverse: bool,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            num_nodes: default_num_nodes(),
            radius: default_radius(),
            num_spirals: default_num_spirals(),
            tilt: Tilt::default(),
            sigma: 0.0,
            inverse: false,
        }
    }
}

impl CurveParams {
    #[must_use]
    pub const fn with_num_nodes(mut self, num_nodes: usize) -> Self {
        self.num_nodes = num_nodes;
        self
    }

    #[must_use]
    pub const fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub const fn with_num_spirals(mut self, num_spirals: f64) -> Self {
        self.num_spirals = num_spirals;
        self
    }

    #[must_use]
    pub const fn with_tilt(mut self, xtilt: f64, ytilt: f64) -> Self {
        self.tilt = Tilt::new(xtilt, ytilt);
        self
    }

    #[must_use]
    pub const fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    #[must_use]
    pub const fn with_inverse(mut self, inverse: bool) -> Self {
        self.inverse = inverse;
        self
    }

    /// Validate the parameters a `kind` sampler relies on.
    ///
    /// # Errors
    ///
    /// Returns the first invalid-argument error found.
    pub fn validate(&self, kind: CurveKind) -> Result<(), ManifoldError> {
        if self.num_nodes == 0 {
            return Err(ManifoldError::InvalidNodeCount(self.num_nodes));
        }
        if !self.radius.is_finite() {
            return Err(ManifoldError::NonFinite {
                name: "radius",
                value: self.radius,
            });
        }
        if kind.is_spiral() {
            let (low, high) = kind.theta_range(self.num_spirals);
            let degenerate = !high.is_finite() || low >= high;
            if !self.num_spirals.is_finite() || self.num_spirals <= 0.0 || degenerate {
                return Err(ManifoldError::InvalidSpirals(self.num_spirals));
            }
        }
        if !self.sigma.is_finite() || self.sigma < 0.0 {
            return Err(ManifoldError::InvalidSigma(self.sigma));
        }
        self.tilt.validate()
    }
}

// ---------------------------------------------------------------------------
// CurveKind
// ---------------------------------------------------------------------------

/// The four generating curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    /// θ ~ U(0, 2π), `r (cos θ, sin θ)`, unit tangent.
    Circle,
    /// θ ~ U(0, 2πk), `rθ (cos θ, sin θ)`, tangent scaled by θ.
    Spiral,
    /// θ = max of two U(0, 2πk) draws, denser towards the outer edge; unit
    /// tangent.
    SpiralUniform,
    /// θ ~ U(kπ, 3kπ), skipping the tight inner turns; tangent scaled by θ.
    SpiralDelayed,
}

impl CurveKind {
    #[must_use]
    pub const fn is_spiral(self) -> bool {
        !matches!(self, Self::Circle)
    }

    /// Support `[low, high)` of θ for `num_spirals` revolutions.
    #[must_use]
    pub fn theta_range(self, num_spirals: f64) -> (f64, f64) {
        match self {
            Self::Circle => (0.0, TAU),
            Self::Spiral | Self::SpiralUniform => (0.0, TAU * num_spirals),
            Self::SpiralDelayed => (num_spirals * PI, num_spirals * 3.0 * PI),
        }
    }

    /// Draw `n` parameters and sort them ascending.
    ///
    /// For [`SpiralUniform`](Self::SpiralUniform) all `n` first draws happen
    /// before the `n` second draws.
    pub fn draw_thetas<R: Rng + ?Sized>(self, n: usize, num_spirals: f64, rng: &mut R) -> Vec<f64> {
        let (low, high) = self.theta_range(num_spirals);
        let dist = Uniform::new(low, high);
        let mut thetas: Vec<f64> = match self {
            Self::SpiralUniform => {
                let first: Vec<f64> = (0..n).map(|_| dist.sample(rng)).collect();
                let second: Vec<f64> = (0..n).map(|_| dist.sample(rng)).collect();
                first
                    .into_iter()
                    .zip(second)
                    .map(|(a, b)| a.max(b))
                    .collect()
            }
            _ => (0..n).map(|_| dist.sample(rng)).collect(),
        };
        thetas.sort_by(f64::total_cmp);
        thetas
    }

    /// Point on the curve at parameter `theta`, in the `z = 0` plane.
    #[must_use]
    pub fn position(self, theta: f64, radius: f64) -> [f64; 3] {
        let (s, c) = theta.sin_cos();
        match self {
            Self::Circle => [radius * c, radius * s, 0.0],
            _ => [radius * theta * c, radius * theta * s, 0.0],
        }
    }

    /// Flow at parameter `theta`, in the `z = 0` plane.
    ///
    /// `Spiral` and `SpiralDelayed` scale the tangent by θ; `Circle` and
    /// `SpiralUniform` do not.
    #[must_use]
    pub fn tangent(self, theta: f64) -> [f64; 3] {
        let (s, c) = (theta + FRAC_PI_2).sin_cos();
        match self {
            Self::Circle | Self::SpiralUniform => [c, s, 0.0],
            Self::Spiral | Self::SpiralDelayed => [theta * c, theta * s, 0.0],
        }
    }

    /// Planar points, flows and labels before tilt and noise.
    fn planar<R: Rng + ?Sized>(
        self,
        params: &CurveParams,
        rng: &mut R,
    ) -> (PointSet, FlowSet, Vec<f64>) {
        let thetas = self.draw_thetas(params.num_nodes, params.num_spirals, rng);
        let n = thetas.len();
        let points = PointSet::from_fn(n, |i, j| self.position(thetas[i], params.radius)[j]);
        let sign = if params.inverse { -1.0 } else { 1.0 };
        let flows = FlowSet::from_fn(n, |i, j| sign * self.tangent(thetas[i])[j]);
        (points, flows, thetas)
    }

    /// Sample a directed curve.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument [`ManifoldError`] if `params` fail
    /// [`CurveParams::validate`].
    pub fn sample<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        params: &CurveParams,
    ) -> Result<ManifoldSample, ManifoldError> {
        params.validate(self)?;
        let (points, flows, labels) = self.planar(params, rng);
        let (points, flows) = xy_tilt(&points, &flows, params.tilt);
        let points = add_noise(points, params.sigma, rng)?;
        debug!(curve = ?self, num_nodes = params.num_nodes, "sampled directed curve");
        ManifoldSample::new(points, flows, labels)
    }
}

// ---------------------------------------------------------------------------
// Named samplers
// ---------------------------------------------------------------------------

/// Sample points on a circle of `radius`, with counter-clockwise unit flows.
///
/// # Errors
///
/// Invalid-argument [`ManifoldError`] for bad parameters.
pub fn directed_circle<R: Rng + ?Sized>(
    rng: &mut R,
    params: &CurveParams,
) -> Result<ManifoldSample, ManifoldError> {
    CurveKind::Circle.sample(rng, params)
}

/// Sample points on an Archimedean spiral with θ-scaled flows.
///
/// # Errors
///
/// Invalid-argument [`ManifoldError`] for bad parameters.
pub fn directed_spiral<R: Rng + ?Sized>(
    rng: &mut R,
    params: &CurveParams,
) -> Result<ManifoldSample, ManifoldError> {
    CurveKind::Spiral.sample(rng, params)
}

/// Spiral with θ biased towards the outer edge and unit flows.
///
/// # Errors
///
/// Invalid-argument [`ManifoldError`] for bad parameters.
pub fn directed_spiral_uniform<R: Rng + ?Sized>(
    rng: &mut R,
    params: &CurveParams,
) -> Result<ManifoldSample, ManifoldError> {
    CurveKind::SpiralUniform.sample(rng, params)
}

/// Spiral starting half a revolution count in, θ ∈ `[kπ, 3kπ)`.
///
/// # Errors
///
/// Invalid-argument [`ManifoldError`] for bad parameters.
pub fn directed_spiral_delayed<R: Rng + ?Sized>(
    rng: &mut R,
    params: &CurveParams,
) -> Result<ManifoldSample, ManifoldError> {
    CurveKind::SpiralDelayed.sample(rng, params)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
