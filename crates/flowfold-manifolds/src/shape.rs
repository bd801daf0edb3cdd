//! Closed set of sampler shapes with static dispatch.

use std::fmt;
use std::str::FromStr;

use flowfold_core::{ManifoldError, ManifoldSample};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::curve::{CurveKind, CurveParams};
use crate::prism::{PrismParams, sample_prism};

/// Every sampler offered by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Circle,
    Spiral,
    SpiralUniform,
    SpiralDelayed,
    Cylinder,
    SwissRoll,
    SwissRollUniform,
    SwissRollDelayed,
}

impl ShapeKind {
    pub const ALL: [Self; 8] = [
        Self::Circle,
        Self::Spiral,
        Self::SpiralUniform,
        Self::SpiralDelayed,
        Self::Cylinder,
        Self::SwissRoll,
        Self::SwissRollUniform,
        Self::SwissRollDelayed,
    ];

    /// The generating curve.
    #[must_use]
    pub const fn curve(self) -> CurveKind {
        match self {
            Self::Circle | Self::Cylinder => CurveKind::Circle,
            Self::Spiral | Self::SwissRoll => CurveKind::Spiral,
            Self::SpiralUniform | Self::SwissRollUniform => CurveKind::SpiralUniform,
            Self::SpiralDelayed | Self::SwissRollDelayed => CurveKind::SpiralDelayed,
        }
    }

    /// `true` for the extruded shapes.
    #[must_use]
    pub const fn is_prism(self) -> bool {
        matches!(
            self,
            Self::Cylinder | Self::SwissRoll | Self::SwissRollUniform | Self::SwissRollDelayed
        )
    }

    #[must_use]
    pub const fn default_num_nodes(self) -> usize {
        if self.is_prism() { 1000 } else { 500 }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Spiral => "spiral",
            Self::SpiralUniform => "spiral_uniform",
            Self::SpiralDelayed => "spiral_delayed",
            Self::Cylinder => "cylinder",
            Self::SwissRoll => "swiss_roll",
            Self::SwissRollUniform => "swiss_roll_uniform",
            Self::SwissRollDelayed => "swiss_roll_delayed",
        }
    }

    /// Sample this shape.  `height` is only used by extruded shapes.
    ///
    /// # Errors
    ///
    /// Invalid-argument [`ManifoldError`] for bad parameters.
    pub fn sample<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        curve: &CurveParams,
        height: f64,
    ) -> Result<ManifoldSample, ManifoldError> {
        if self.is_prism() {
            sample_prism(self.curve(), rng, &PrismParams::new(*curve, height))
        } else {
            self.curve().sample(rng, curve)
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Unknown shape name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shape '{0}'")]
pub struct UnknownShape(pub String);

impl FromStr for ShapeKind {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| UnknownShape(s.to_string()))
    }
}
