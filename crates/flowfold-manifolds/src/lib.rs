//! Directed manifold samplers.
//!
//! Generates labeled 3D point clouds on circles, spirals, cylinders and
//! swiss rolls.  Every point carries a flow (a tangent vector giving the
//! direction of travel along the curve) and a label (the curve parameter θ
//! that produced it).
//!
//! All sampling takes an explicit `&mut R: Rng`; seed a `ChaCha8Rng` for
//! reproducible datasets.
//!
//! # Example
//!
//! ```
//! use flowfold_manifolds::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let params = CurveParams::default().with_num_nodes(100).with_tilt(0.3, 0.0);
//! let sample = directed_spiral(&mut rng, &params).unwrap();
//! assert_eq!(sample.len(), 100);
//! assert!(sample.labels_sorted());
//! ```

pub mod config;
pub mod curve;
pub mod noise;
pub mod prism;
pub mod shape;
pub mod tilt;

pub use config::SamplerConfig;
pub use curve::{
    CurveKind, CurveParams, directed_circle, directed_spiral, directed_spiral_delayed,
    directed_spiral_uniform,
};
pub use noise::add_noise;
pub use prism::{
    PrismParams, directed_cylinder, directed_swiss_roll, directed_swiss_roll_delayed,
    directed_swiss_roll_uniform, generate_prism,
};
pub use shape::{ShapeKind, UnknownShape};
pub use tilt::{PlaneRotations, Tilt, rotation_transform, xy_tilt};

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::config::SamplerConfig;
    pub use crate::curve::{
        CurveKind, CurveParams, directed_circle, directed_spiral, directed_spiral_delayed,
        directed_spiral_uniform,
    };
    pub use crate::prism::{
        PrismParams, directed_cylinder, directed_swiss_roll, directed_swiss_roll_delayed,
        directed_swiss_roll_uniform,
    };
    pub use crate::shape::ShapeKind;
    pub use crate::tilt::Tilt;
    pub use flowfold_core::prelude::*;
}
