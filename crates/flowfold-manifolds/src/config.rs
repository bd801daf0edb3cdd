use std::path::Path;

use flowfold_core::{ConfigError, ManifoldSample};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::curve::{CurveParams, default_num_spirals, default_radius};
use crate::prism::default_height;
use crate::shape::ShapeKind;
use crate::tilt::Tilt;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_shape() -> ShapeKind {
    ShapeKind::Circle
}

// ---------------------------------------------------------------------------
// SamplerConfig
// ---------------------------------------------------------------------------

/// Sampler configuration, typically loaded from a TOML file.
///
/// ```toml
/// shape = "swiss_roll"
/// seed = 7
/// num_nodes = 2000
/// xtilt = 0.5
/// sigma = 0.05
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Which sampler to run (default: circle).
    #[serde(default = "default_shape")]
    pub shape: ShapeKind,

    /// Root seed of the run.
    #[serde(default)]
    pub seed: u64,

    /// Point count; `None` uses the shape's default (500 flat, 1000 extruded).
    #[serde(default)]
    pub num_nodes: Option<usize>,

    #[serde(default = "default_radius")]
    pub radius: f64,

    /// Revolutions of spiral shapes.
    #[serde(default = "default_num_spirals")]
    pub num_spirals: f64,

    /// Extrusion height of cylinder and swiss-roll shapes.
    #[serde(default = "default_height")]
    pub height: f64,

    /// Tilt about the x axis, radians.
    #[serde(default)]
    pub xtilt: f64,

    /// Tilt about the y axis, radians.
    #[serde(default)]
    pub ytilt: f64,

    /// Standard deviation of point noise.
    #[serde(default)]
    pub sigma: f64,

    /// Reverse every flow.
    #[serde(default)]
    pub inverse: bool,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            shape: default_shape(),
            seed: 0,
            num_nodes: None,
            radius: default_radius(),
            num_spirals: default_num_spirals(),
            height: default_height(),
            xtilt: 0.0,
            ytilt: 0.0,
            sigma: 0.0,
            inverse: false,
        }
    }
}

impl SamplerConfig {
    /// Config for `shape` with every other field at its default.
    #[must_use]
    pub fn for_shape(shape: ShapeKind) -> Self {
        Self {
            shape,
            ..Self::default()
        }
    }

    /// Effective point count.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
            .unwrap_or_else(|| self.shape.default_num_nodes())
    }

    /// Curve parameters derived from this config.
    #[must_use]
    pub fn curve_params(&self) -> CurveParams {
        CurveParams {
            num_nodes: self.num_nodes(),
            radius: self.radius,
            num_spirals: self.num_spirals,
            tilt: Tilt::new(self.xtilt, self.ytilt),
            sigma: self.sigma,
            inverse: self.inverse,
        }
    }

    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.curve_params().validate(self.shape.curve())?;
        if self.shape.is_prism() && (!self.height.is_finite() || self.height < 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "height".into(),
                message: format!("must be finite and >= 0, got {}", self.height),
            });
        }
        Ok(())
    }

    /// Parse from a TOML string and validate.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Draw one sample of the configured shape.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ManifoldSample, ConfigError> {
        Ok(self
            .shape
            .sample(rng, &self.curve_params(), self.height)?)
    }
}
