//! Randomness applied to sampled point sets.
//!
//! - [`Jitter`](jitter::Jitter): isotropic Gaussian noise on every coordinate.
//! - [`AxisOffset`](offset::AxisOffset): uniform offsets along one axis, used
//!   to extrude planar curves.
//!
//! Both take an explicit `&mut R: Rng`, so a seeded generator reproduces the
//! same point set, and both draw nothing when their scale is zero.
//!
//! ```
//! use flowfold_noise::prelude::*;
//! use nalgebra::MatrixXx3;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut points = MatrixXx3::<f64>::zeros(10);
//! AxisOffset::centered(2, 4.0).unwrap().apply(&mut points, &mut rng);
//! assert!(points.column(2).iter().all(|z| z.abs() <= 2.0));
//! assert!(points.column(0).iter().all(|x| *x == 0.0));
//! ```

pub mod error;
pub mod jitter;
pub mod offset;

pub use error::NoiseError;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::error::NoiseError;
    pub use crate::jitter::Jitter;
    pub use crate::offset::AxisOffset;
}
