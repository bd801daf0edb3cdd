//! Shared test fixtures and utilities for flowfold crates.
//!
//! Provides deterministic RNG setup and geometric checks used by the sampler
//! tests.

pub mod geometry;
pub mod rng;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use geometry::{max_distance_change, pairwise_distances};
pub use rng::{random_angles, seeded_rng};
