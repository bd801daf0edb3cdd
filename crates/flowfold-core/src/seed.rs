//! Deterministic seed hierarchy for reproducible dataset runs.
//!
//! ```text
//! Run seed
//! └── Sample seed (per generated point cloud)
//! ```
//!
//! Sample seeds are derived by hashing, so a whole run is reproducible from a
//! single root seed and any one sample can be regenerated on its own.

use std::hash::{DefaultHasher, Hash, Hasher};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Derive a child seed from a parent seed and a numeric index.
#[must_use]
pub fn derive_seed_indexed(parent: u64, index: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    parent.hash(&mut hasher);
    index.hash(&mut hasher);
    hasher.finish()
}

/// Hierarchical seed manager for reproducible sampling runs.
///
/// # Example
///
/// ```
/// use flowfold_core::seed::SeedHierarchy;
///
/// let seeds = SeedHierarchy::new(42);
/// assert_eq!(seeds.sample_seed(3), SeedHierarchy::new(42).sample_seed(3));
/// let _rng = seeds.sample_rng(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedHierarchy {
    root: u64,
}

impl SeedHierarchy {
    /// Create a new hierarchy from a root seed.
    #[must_use]
    pub const fn new(root: u64) -> Self {
        Self { root }
    }

    /// The root (run-level) seed.
    #[must_use]
    pub const fn root(&self) -> u64 {
        self.root
    }

    /// Derive the seed of the `index`-th sample in a run.
    #[must_use]
    pub fn sample_seed(&self, index: u64) -> u64 {
        derive_seed_indexed(self.root, index)
    }

    /// Create a `ChaCha8Rng` for the `index`-th sample.
    #[must_use]
    pub fn sample_rng(&self, index: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.sample_seed(index))
    }
}

impl Default for SeedHierarchy {
    fn default() -> Self {
        Self::new(0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
